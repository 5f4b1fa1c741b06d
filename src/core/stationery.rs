//! Stationery catalog - Items and their kind-specific details.
//!
//! A stationery item is created once with its price and stock; its details are
//! attached as a paper product, writing material, storage item or general
//! product row, each filed under a stationery subcategory.

use crate::{
    core::{catalog::clean_name, pricing::ensure_price},
    entities::{
        GeneralProduct, PaperProduct, Stationery, StorageType, SubcategoryStationery,
        WritingMaterial, general_product, paper_product, stationery, storage_type,
        subcategory_stationery, writing_material,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use std::collections::BTreeSet;

/// Fields of a new stationery item.
#[derive(Debug, Clone)]
pub struct NewStationery {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: Option<i32>,
    pub date_of_receipt: DateTimeUtc,
    pub size: Option<String>,
    pub weight: Option<i16>,
    pub age_limit: Option<String>,
    pub material_color: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PaperDetails {
    pub number_of_sheets: Option<i16>,
    pub format: Option<String>,
    pub type_of_ruler: Option<String>,
    pub peculiarity: Option<String>,
    pub mounting_type: Option<String>,
    pub calendar_year: Option<i16>,
    pub quantity_colors: Option<i16>,
}

#[derive(Debug, Clone, Default)]
pub struct WritingDetails {
    pub inc_color: Option<String>,
    pub inc_base: Option<String>,
    pub pen_thickness: Option<String>,
    pub peculiarity: Option<String>,
    pub quantity_colors: i16,
}

#[derive(Debug, Clone, Default)]
pub struct StorageDetails {
    pub material: Option<String>,
    pub number_of_branches: Option<i16>,
    pub gender: Option<String>,
    pub peculiarity: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct GeneralDetails {
    pub material: Option<String>,
    pub number_of_punched_sheets: Option<i16>,
    pub calculator_bit_size: Option<i16>,
    pub number_stapler: Option<String>,
    pub peculiarity: Option<String>,
    pub number_staples: Option<String>,
}

/// Creates a stationery subcategory.
pub async fn create_stationery_subcategory(
    db: &DatabaseConnection,
    name: &str,
) -> Result<subcategory_stationery::Model> {
    let subcategory = subcategory_stationery::ActiveModel {
        subcategory_id: Set(Uuid::new_v4()),
        name_subcategory: Set(clean_name(name, "Stationery subcategory")?),
    };
    subcategory.insert(db).await.map_err(Into::into)
}

/// Lists all stationery subcategories alphabetically.
pub async fn get_stationery_subcategories(
    db: &DatabaseConnection,
) -> Result<Vec<subcategory_stationery::Model>> {
    SubcategoryStationery::find()
        .order_by_asc(subcategory_stationery::Column::NameSubcategory)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a stationery item after validating its name and price.
pub async fn create_stationery(
    db: &DatabaseConnection,
    new_item: NewStationery,
) -> Result<stationery::Model> {
    let name = clean_name(&new_item.name, "Stationery")?;
    ensure_price(new_item.price)?;

    let item = stationery::ActiveModel {
        stationery_id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(new_item.description),
        price_stationery: Set(new_item.price),
        stock: Set(new_item.stock),
        date_of_receipt: Set(new_item.date_of_receipt),
        size: Set(new_item.size),
        weight: Set(new_item.weight),
        age_limit: Set(new_item.age_limit),
        material_color: Set(new_item.material_color),
    };
    item.insert(db).await.map_err(Into::into)
}

/// Retrieves a stationery item by its unique ID.
pub async fn get_stationery_by_id(
    db: &DatabaseConnection,
    stationery_id: Uuid,
) -> Result<Option<stationery::Model>> {
    Stationery::find_by_id(stationery_id)
        .one(db)
        .await
        .map_err(Into::into)
}

async fn ensure_item_and_subcategory(
    db: &DatabaseConnection,
    stationery_id: Uuid,
    subcategory_id: Uuid,
) -> Result<()> {
    Stationery::find_by_id(stationery_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Stationery", stationery_id))?;
    SubcategoryStationery::find_by_id(subcategory_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Stationery subcategory", subcategory_id))?;
    Ok(())
}

/// Attaches paper product details (notebooks, planners, calendars).
pub async fn add_paper_product(
    db: &DatabaseConnection,
    stationery_id: Uuid,
    subcategory_id: Uuid,
    details: PaperDetails,
) -> Result<paper_product::Model> {
    ensure_item_and_subcategory(db, stationery_id, subcategory_id).await?;

    paper_product::ActiveModel {
        paper_products_id: Set(Uuid::new_v4()),
        stationery_id: Set(stationery_id),
        subcategory_id: Set(subcategory_id),
        number_of_sheets: Set(details.number_of_sheets),
        format: Set(details.format),
        type_of_ruler: Set(details.type_of_ruler),
        peculiarity: Set(details.peculiarity),
        mounting_type: Set(details.mounting_type),
        calendar_year: Set(details.calendar_year),
        quantity_colors: Set(details.quantity_colors),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Attaches writing material details. A set must contain at least one color.
pub async fn add_writing_material(
    db: &DatabaseConnection,
    stationery_id: Uuid,
    subcategory_id: Uuid,
    details: WritingDetails,
) -> Result<writing_material::Model> {
    if details.quantity_colors <= 0 {
        return Err(Error::InvalidQuantity {
            quantity: i32::from(details.quantity_colors),
        });
    }
    ensure_item_and_subcategory(db, stationery_id, subcategory_id).await?;

    writing_material::ActiveModel {
        writing_materials_id: Set(Uuid::new_v4()),
        stationery_id: Set(stationery_id),
        subcategory_id: Set(subcategory_id),
        inc_color: Set(details.inc_color),
        inc_base: Set(details.inc_base),
        pen_thickness: Set(details.pen_thickness),
        peculiarity: Set(details.peculiarity),
        quantity_colors: Set(details.quantity_colors),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Attaches storage item details (folders, pencil cases, backpacks).
pub async fn add_storage_type(
    db: &DatabaseConnection,
    stationery_id: Uuid,
    subcategory_id: Uuid,
    details: StorageDetails,
) -> Result<storage_type::Model> {
    ensure_item_and_subcategory(db, stationery_id, subcategory_id).await?;

    storage_type::ActiveModel {
        storage_type_id: Set(Uuid::new_v4()),
        stationery_id: Set(stationery_id),
        subcategory_id: Set(subcategory_id),
        material: Set(details.material),
        number_of_branches: Set(details.number_of_branches),
        gender: Set(details.gender),
        peculiarity: Set(details.peculiarity),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Attaches general product details (staplers, hole punches, calculators).
pub async fn add_general_product(
    db: &DatabaseConnection,
    stationery_id: Uuid,
    subcategory_id: Uuid,
    details: GeneralDetails,
) -> Result<general_product::Model> {
    ensure_item_and_subcategory(db, stationery_id, subcategory_id).await?;

    general_product::ActiveModel {
        general_products_id: Set(Uuid::new_v4()),
        stationery_id: Set(stationery_id),
        subcategory_id: Set(subcategory_id),
        material: Set(details.material),
        number_of_punched_sheets: Set(details.number_of_punched_sheets),
        calculator_bit_size: Set(details.calculator_bit_size),
        number_stapler: Set(details.number_stapler),
        peculiarity: Set(details.peculiarity),
        number_staples: Set(details.number_staples),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Lists the stationery items filed under a subcategory through any of the
/// four detail tables, alphabetically by name.
pub async fn get_stationery_by_subcategory(
    db: &DatabaseConnection,
    subcategory_id: Uuid,
) -> Result<Vec<stationery::Model>> {
    let mut ids: BTreeSet<Uuid> = BTreeSet::new();

    ids.extend(
        PaperProduct::find()
            .select_only()
            .column(paper_product::Column::StationeryId)
            .filter(paper_product::Column::SubcategoryId.eq(subcategory_id))
            .into_tuple::<Uuid>()
            .all(db)
            .await?,
    );
    ids.extend(
        WritingMaterial::find()
            .select_only()
            .column(writing_material::Column::StationeryId)
            .filter(writing_material::Column::SubcategoryId.eq(subcategory_id))
            .into_tuple::<Uuid>()
            .all(db)
            .await?,
    );
    ids.extend(
        StorageType::find()
            .select_only()
            .column(storage_type::Column::StationeryId)
            .filter(storage_type::Column::SubcategoryId.eq(subcategory_id))
            .into_tuple::<Uuid>()
            .all(db)
            .await?,
    );
    ids.extend(
        GeneralProduct::find()
            .select_only()
            .column(general_product::Column::StationeryId)
            .filter(general_product::Column::SubcategoryId.eq(subcategory_id))
            .into_tuple::<Uuid>()
            .all(db)
            .await?,
    );

    if ids.is_empty() {
        return Ok(Vec::new());
    }

    Stationery::find()
        .filter(stationery::Column::StationeryId.is_in(ids))
        .order_by_asc(stationery::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_stationery_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_test_stationery(&db, "Grid notebook", Decimal::new(450, 2)).await?;
        assert_eq!(item.name, "Grid notebook");
        assert_eq!(item.price_stationery, Decimal::new(450, 2));

        let found = get_stationery_by_id(&db, item.stationery_id).await?.unwrap();
        assert_eq!(found, item);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_stationery_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_test_stationery(&db, "  ", Decimal::ONE).await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));

        let result = create_test_stationery(&db, "Pen", Decimal::new(-1, 0)).await;
        assert!(matches!(result, Err(Error::InvalidAmount { amount: _ })));

        Ok(())
    }

    #[tokio::test]
    async fn test_stationery_by_subcategory() -> Result<()> {
        let db = setup_test_db().await?;
        let notebooks = create_stationery_subcategory(&db, "Notebooks").await?;
        let pens = create_stationery_subcategory(&db, "Pens").await?;

        let planner = create_test_stationery(&db, "Planner", Decimal::new(900, 2)).await?;
        let notebook = create_test_stationery(&db, "Notebook", Decimal::new(300, 2)).await?;
        let gel_pen = create_test_stationery(&db, "Gel pen", Decimal::new(150, 2)).await?;

        add_paper_product(
            &db,
            planner.stationery_id,
            notebooks.subcategory_id,
            PaperDetails {
                calendar_year: Some(2027),
                format: Some("A5".to_string()),
                ..Default::default()
            },
        )
        .await?;
        add_paper_product(
            &db,
            notebook.stationery_id,
            notebooks.subcategory_id,
            PaperDetails {
                number_of_sheets: Some(96),
                ..Default::default()
            },
        )
        .await?;
        add_writing_material(
            &db,
            gel_pen.stationery_id,
            pens.subcategory_id,
            WritingDetails {
                inc_color: Some("blue".to_string()),
                quantity_colors: 1,
                ..Default::default()
            },
        )
        .await?;

        let items = get_stationery_by_subcategory(&db, notebooks.subcategory_id).await?;
        let names: Vec<_> = items.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Notebook", "Planner"]);

        let items = get_stationery_by_subcategory(&db, pens.subcategory_id).await?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].stationery_id, gel_pen.stationery_id);

        let empty = create_stationery_subcategory(&db, "Calculators").await?;
        assert!(
            get_stationery_by_subcategory(&db, empty.subcategory_id)
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_detail_rows_require_item_and_subcategory() -> Result<()> {
        let db = setup_test_db().await?;
        let folders = create_stationery_subcategory(&db, "Folders").await?;
        let folder = create_test_stationery(&db, "Folder", Decimal::ONE).await?;

        let result = add_storage_type(
            &db,
            Uuid::new_v4(),
            folders.subcategory_id,
            StorageDetails::default(),
        )
        .await;
        assert!(matches!(result, Err(Error::NotFound { .. })));

        let result =
            add_general_product(&db, folder.stationery_id, Uuid::new_v4(), GeneralDetails::default())
                .await;
        assert!(matches!(result, Err(Error::NotFound { .. })));

        let stored = add_storage_type(
            &db,
            folder.stationery_id,
            folders.subcategory_id,
            StorageDetails {
                material: Some("plastic".to_string()),
                ..Default::default()
            },
        )
        .await?;
        assert_eq!(stored.material.as_deref(), Some("plastic"));

        Ok(())
    }

    #[tokio::test]
    async fn test_writing_material_needs_colors() -> Result<()> {
        let db = setup_test_db().await?;
        let pens = create_stationery_subcategory(&db, "Pens").await?;
        let pen = create_test_stationery(&db, "Pen", Decimal::ONE).await?;

        let result = add_writing_material(
            &db,
            pen.stationery_id,
            pens.subcategory_id,
            WritingDetails::default(),
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0 })));

        let subcategories = get_stationery_subcategories(&db).await?;
        assert_eq!(subcategories.len(), 1);

        Ok(())
    }
}
