/// Delivery addresses saved by users
pub mod address;
/// Basket management and checkout into orders
pub mod basket;
/// Books, authors, publishers, categories and reference data seeding
pub mod catalog;
/// Orders and their status lifecycle
pub mod order;
/// Order line items, priced from the catalog at save time
pub mod order_detail;
/// Payments and their amount reconciliation
pub mod payment;
/// Pure price and amount computations
pub mod pricing;
/// Book reviews and ratings
pub mod review;
/// Stationery items and their subtype details
pub mod stationery;
/// Author and publisher subscriptions
pub mod subscription;
/// User accounts, credentials and capabilities
pub mod user;
/// Wishlists
pub mod wishlist;
