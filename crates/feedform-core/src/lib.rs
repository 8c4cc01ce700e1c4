//! Dynamic parameter form builder for RSSHub-style route descriptors.
//!
//! A [`route::RouteDescriptor`] carries a path template and parameter
//! metadata. From it this crate derives the form fields, their default
//! values and validation rules, and assembles the feed URL that is handed
//! to a [`fetch::FeedFetcher`].

pub mod config;
pub mod logging;

pub mod assemble;
pub mod defaults;
pub mod fetch;
pub mod form;
pub mod route;
pub mod schema;
pub mod template;
