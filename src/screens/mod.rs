//! Screens
//!
//! One component per navigation route.

mod home;
mod bucket_list;
mod travel_list;
mod destination_detail;

pub use home::HomeScreen;
pub use bucket_list::BucketListScreen;
pub use travel_list::TravelListScreen;
pub use destination_detail::DestinationDetailScreen;
