use bookshelf_store::{
    config::{admin, catalog, database},
    core::{
        catalog::seed_reference_data,
        user::{UserFields, create_superuser, find_user_by_email},
    },
    errors::Result,
};
use dotenvy::dotenv;
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Connect and create the schema
    let database_url = database::get_database_url();
    if let Some(dir) = database::sqlite_parent_dir(&database_url) {
        std::fs::create_dir_all(dir)?;
    }
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database schema ready."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed reference data when a seed file is present
    let seed_path = catalog::catalog_config_path();
    if Path::new(&seed_path).exists() {
        let seed = catalog::load_catalog_seed(&seed_path)
            .inspect_err(|e| error!("Failed to load {}: {}", seed_path, e))?;
        seed_reference_data(&db, &seed)
            .await
            .inspect(|summary| info!(?summary, "Reference data seeded."))
            .inspect_err(|e| error!("Failed to seed reference data: {}", e))?;
    } else {
        warn!("No seed file at {}; skipping reference data.", seed_path);
    }

    // 5. Provision the administrator account, once
    if let Some(admin) = admin::get_admin_config() {
        if find_user_by_email(&db, &admin.email).await?.is_some() {
            info!("Administrator {} already exists.", admin.email);
        } else {
            let fields = UserFields {
                name: admin.name,
                last_name: admin.last_name,
                phone: admin.phone,
                ..Default::default()
            };
            create_superuser(&db, &admin.email, admin.password.as_deref(), fields)
                .await
                .inspect(|user| info!(user_id = %user.user_id, "Administrator created."))
                .inspect_err(|e| error!("Failed to create administrator: {}", e))?;
        }
    }

    info!("Store database is up to date.");
    Ok(())
}
