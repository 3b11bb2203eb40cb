//! Application services - read views over the command registry

pub mod help_service;

pub use help_service::{describe, list_by_category, CategoryListing, DescriptorView, HelpService, LookupMiss};
