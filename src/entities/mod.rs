//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod address;
pub mod author;
pub mod basket;
pub mod binding_type;
pub mod book;
pub mod book_series;
pub mod category;
pub mod category_book;
pub mod general_product;
pub mod language;
pub mod order;
pub mod order_detail;
pub mod paper_product;
pub mod payment;
pub mod publisher;
pub mod review;
pub mod stationery;
pub mod storage_type;
pub mod subcategory;
pub mod subcategory_stationery;
pub mod subscription;
pub mod user;
pub mod wishlist;
pub mod writing_material;

// Re-export specific types to avoid conflicts
pub use address::{Entity as Address, Model as AddressModel};
pub use author::{Entity as Author, Model as AuthorModel};
pub use basket::{Entity as Basket, Model as BasketModel};
pub use binding_type::{Entity as BindingType, Model as BindingTypeModel};
pub use book::{Column as BookColumn, Entity as Book, Model as BookModel};
pub use book_series::{Entity as BookSeries, Model as BookSeriesModel};
pub use category::{Entity as Category, Model as CategoryModel};
pub use category_book::{Entity as CategoryBook, Model as CategoryBookModel};
pub use general_product::{Entity as GeneralProduct, Model as GeneralProductModel};
pub use language::{Entity as Language, Model as LanguageModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel, OrderStatus};
pub use order_detail::{
    Column as OrderDetailColumn, Entity as OrderDetail, Model as OrderDetailModel,
};
pub use paper_product::{Entity as PaperProduct, Model as PaperProductModel};
pub use payment::{
    Column as PaymentColumn, Entity as Payment, Model as PaymentModel, PaymentStatus,
};
pub use publisher::{Entity as Publisher, Model as PublisherModel};
pub use review::{Column as ReviewColumn, Entity as Review, Model as ReviewModel};
pub use stationery::{Entity as Stationery, Model as StationeryModel};
pub use storage_type::{Entity as StorageType, Model as StorageTypeModel};
pub use subcategory::{Entity as Subcategory, Model as SubcategoryModel};
pub use subcategory_stationery::{
    Entity as SubcategoryStationery, Model as SubcategoryStationeryModel,
};
pub use subscription::{Entity as Subscription, Model as SubscriptionModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
pub use wishlist::{Entity as Wishlist, Model as WishlistModel};
pub use writing_material::{Entity as WritingMaterial, Model as WritingMaterialModel};
