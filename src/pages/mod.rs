//! Page components, one per route

mod about_us;
mod anita;
mod become_a_buyer;
mod become_a_seller;
mod book_demo;
mod buyer_dashboard;
mod contact_us;
mod home;
mod integration_solutions;
mod learn;
mod login;
mod marketplace;
mod not_found;
mod procurement_solutions;
mod rfq_creation;
mod sales_solutions;
mod seller_dashboard;
mod seller_page;
mod smart_sourcing;
mod vendors_hub;

pub use about_us::AboutUs;
pub use anita::Anita;
pub use become_a_buyer::BecomeABuyer;
pub use become_a_seller::BecomeASeller;
pub use book_demo::BookDemo;
pub use buyer_dashboard::BuyerDashboard;
pub use contact_us::ContactUs;
pub use home::Home;
pub use integration_solutions::IntegrationSolutions;
pub use learn::Learn;
pub use login::Login;
pub use marketplace::Marketplace;
pub use not_found::NotFound;
pub use procurement_solutions::ProcurementSolutions;
pub use rfq_creation::RfqCreation;
pub use sales_solutions::SalesSolutions;
pub use seller_dashboard::SellerDashboard;
pub use seller_page::SellerPage;
pub use smart_sourcing::SmartSourcingTools;
pub use vendors_hub::VendorsHub;
