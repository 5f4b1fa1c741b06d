//! Book catalog - Books and the reference tables they point to.
//!
//! Reference rows (authors, publishers, binding types, series, languages,
//! categories and subcategories) are unique by name; names are trimmed and must
//! not be empty. Books are unique by ISBN and carry the unit price that line-item
//! pricing reads at save time.

use crate::{
    config::catalog::CatalogSeed,
    core::pricing::ensure_price,
    entities::{
        Author, Book, BindingType, Category, CategoryBook, Language, SubcategoryStationery,
        Subcategory, author, binding_type, book, book_series, category, category_book, language,
        publisher, subcategory, subcategory_stationery,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Fields of a new book. The identifier is generated on insert.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub author_id: i32,
    pub binding_type_id: i32,
    pub series_id: Option<i32>,
    pub publisher_id: i32,
    pub language_code: i32,
    pub title: String,
    pub price_book: Decimal,
    pub stock: Option<i32>,
    pub image_path: String,
    pub age_limit: Option<String>,
    pub description: String,
    pub circulation: i32,
    pub weight: i16,
    pub size: String,
    pub isbn: String,
    pub pages: i16,
    pub year_of_publication: i32,
    pub year_of_release: Option<i32>,
}

/// Number of reference rows inserted by [`seed_reference_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub languages: usize,
    pub binding_types: usize,
    pub categories: usize,
    pub subcategories: usize,
    pub stationery_subcategories: usize,
}

pub(crate) fn clean_name(name: &str, what: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation {
            message: format!("{what} name cannot be empty"),
        });
    }
    Ok(name.to_string())
}

/// Creates an author with a unique name.
pub async fn create_author(db: &DatabaseConnection, name: &str) -> Result<author::Model> {
    let author = author::ActiveModel {
        name: Set(clean_name(name, "Author")?),
        ..Default::default()
    };
    author
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Author"))
}

/// Finds an author by exact name.
pub async fn get_author_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<author::Model>> {
    Author::find()
        .filter(author::Column::Name.eq(name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a publisher with a unique name.
pub async fn create_publisher(db: &DatabaseConnection, name: &str) -> Result<publisher::Model> {
    let publisher = publisher::ActiveModel {
        name_publisher: Set(clean_name(name, "Publisher")?),
        ..Default::default()
    };
    publisher
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Publisher"))
}

/// Creates a binding type with a unique name.
pub async fn create_binding_type(
    db: &DatabaseConnection,
    name: &str,
) -> Result<binding_type::Model> {
    let binding_type = binding_type::ActiveModel {
        name_binding_type: Set(clean_name(name, "Binding type")?),
        ..Default::default()
    };
    binding_type
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Binding type"))
}

/// Creates a book series with a unique name.
pub async fn create_book_series(db: &DatabaseConnection, name: &str) -> Result<book_series::Model> {
    let series = book_series::ActiveModel {
        name_book_series: Set(clean_name(name, "Book series")?),
        ..Default::default()
    };
    series
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Book series"))
}

/// Creates a language with a unique name.
pub async fn create_language(db: &DatabaseConnection, name: &str) -> Result<language::Model> {
    let language = language::ActiveModel {
        name: Set(clean_name(name, "Language")?),
        ..Default::default()
    };
    language
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Language"))
}

/// Creates a top-level book category with a unique name.
pub async fn create_category(db: &DatabaseConnection, name: &str) -> Result<category::Model> {
    let category = category::ActiveModel {
        name_category: Set(clean_name(name, "Category")?),
        ..Default::default()
    };
    category
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Category"))
}

/// Creates a subcategory under an existing category.
///
/// # Errors
/// Returns an error if:
/// - The name is empty
/// - The parent category does not exist
/// - A subcategory with this name already exists anywhere in the tree
pub async fn create_subcategory(
    db: &DatabaseConnection,
    category_id: i32,
    name: &str,
) -> Result<subcategory::Model> {
    let name = clean_name(name, "Subcategory")?;

    Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Category", category_id))?;

    let subcategory = subcategory::ActiveModel {
        category_id: Set(category_id),
        name_subcategory: Set(name),
        ..Default::default()
    };
    subcategory
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Subcategory"))
}

/// Lists the subcategories of a category, alphabetically.
pub async fn get_subcategories(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<subcategory::Model>> {
    Subcategory::find()
        .filter(subcategory::Column::CategoryId.eq(category_id))
        .order_by_asc(subcategory::Column::NameSubcategory)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a book after validating its title, ISBN and price.
///
/// # Errors
/// Returns an error if:
/// - The title or ISBN is empty
/// - The price is negative
/// - The ISBN is already in the catalog
/// - A referenced author, publisher, binding type, series or language is missing
#[instrument(skip(db, new_book), fields(isbn = %new_book.isbn))]
pub async fn create_book(db: &DatabaseConnection, new_book: NewBook) -> Result<book::Model> {
    let title = clean_name(&new_book.title, "Book title")?;
    let isbn = clean_name(&new_book.isbn, "ISBN")?;
    ensure_price(new_book.price_book)?;

    let book = book::ActiveModel {
        book_id: Set(Uuid::new_v4()),
        author_id: Set(new_book.author_id),
        binding_type_id: Set(new_book.binding_type_id),
        series_id: Set(new_book.series_id),
        publisher_id: Set(new_book.publisher_id),
        title: Set(title),
        price_book: Set(new_book.price_book),
        stock: Set(new_book.stock),
        image_path: Set(new_book.image_path),
        age_limit: Set(new_book.age_limit),
        language_code: Set(new_book.language_code),
        description: Set(new_book.description),
        circulation: Set(new_book.circulation),
        weight: Set(new_book.weight),
        size: Set(new_book.size),
        isbn: Set(isbn),
        pages: Set(new_book.pages),
        year_of_publication: Set(new_book.year_of_publication),
        year_of_release: Set(new_book.year_of_release),
    };

    let book = book
        .insert(db)
        .await
        .map_err(|e| Error::from_unique_violation(e, "Book"))?;
    info!(book_id = %book.book_id, "Created book");
    Ok(book)
}

/// Retrieves a book by its unique ID.
pub async fn get_book_by_id(db: &DatabaseConnection, book_id: Uuid) -> Result<Option<book::Model>> {
    Book::find_by_id(book_id).one(db).await.map_err(Into::into)
}

/// Retrieves a book by ISBN.
pub async fn get_book_by_isbn(db: &DatabaseConnection, isbn: &str) -> Result<Option<book::Model>> {
    Book::find()
        .filter(book::Column::Isbn.eq(isbn.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Changes a book's unit price.
///
/// Existing line items keep their stored price until they are saved again.
pub async fn update_book_price(
    db: &DatabaseConnection,
    book_id: Uuid,
    new_price: Decimal,
) -> Result<book::Model> {
    ensure_price(new_price)?;

    let mut book: book::ActiveModel = Book::find_by_id(book_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("Book", book_id))?
        .into();

    book.price_book = Set(new_price);
    book.update(db).await.map_err(Into::into)
}

/// Files a book under a category, a subcategory, or both.
///
/// # Errors
/// Returns [`Error::Validation`] when neither a category nor a subcategory is given.
pub async fn assign_book_category(
    db: &DatabaseConnection,
    book_id: Uuid,
    category_id: Option<i32>,
    subcategory_id: Option<i32>,
) -> Result<category_book::Model> {
    if category_id.is_none() && subcategory_id.is_none() {
        return Err(Error::Validation {
            message: "A category or a subcategory is required".to_string(),
        });
    }

    let placement = category_book::ActiveModel {
        book_id: Set(book_id),
        category_id: Set(category_id),
        subcategory: Set(subcategory_id),
        ..Default::default()
    };
    placement.insert(db).await.map_err(Into::into)
}

/// Lists the books filed directly under a category, alphabetically by title.
pub async fn get_books_in_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<book::Model>> {
    Book::find()
        .inner_join(CategoryBook)
        .filter(category_book::Column::CategoryId.eq(category_id))
        .order_by_asc(book::Column::Title)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts reference rows from the seed that are not present yet.
///
/// Existing rows are matched by name, so running the seed twice inserts nothing
/// the second time.
#[instrument(skip_all)]
pub async fn seed_reference_data(db: &DatabaseConnection, seed: &CatalogSeed) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for name in &seed.languages {
        let exists = Language::find()
            .filter(language::Column::Name.eq(name.trim()))
            .one(db)
            .await?
            .is_some();
        if !exists {
            create_language(db, name).await?;
            summary.languages += 1;
        }
    }

    for name in &seed.binding_types {
        let exists = BindingType::find()
            .filter(binding_type::Column::NameBindingType.eq(name.trim()))
            .one(db)
            .await?
            .is_some();
        if !exists {
            create_binding_type(db, name).await?;
            summary.binding_types += 1;
        }
    }

    for category_seed in &seed.categories {
        let existing = Category::find()
            .filter(category::Column::NameCategory.eq(category_seed.name.trim()))
            .one(db)
            .await?;
        let category = match existing {
            Some(category) => category,
            None => {
                summary.categories += 1;
                create_category(db, &category_seed.name).await?
            }
        };

        for name in &category_seed.subcategories {
            let exists = Subcategory::find()
                .filter(subcategory::Column::NameSubcategory.eq(name.trim()))
                .one(db)
                .await?
                .is_some();
            if !exists {
                create_subcategory(db, category.category_id, name).await?;
                summary.subcategories += 1;
            }
        }
    }

    for name in &seed.stationery_subcategories {
        let exists = SubcategoryStationery::find()
            .filter(subcategory_stationery::Column::NameSubcategory.eq(name.trim()))
            .one(db)
            .await?
            .is_some();
        if !exists {
            crate::core::stationery::create_stationery_subcategory(db, name).await?;
            summary.stationery_subcategories += 1;
        }
    }

    debug!(?summary, "Reference data seeded");
    Ok(summary)
}
