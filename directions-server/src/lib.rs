//! Route directions server.
//!
//! Computes a route between two points, optionally through any number of
//! stops, by querying a directions web service and decoding the geometry it
//! returns. Long stop lists are split across several requests and stitched
//! back into one path.

pub mod domain;
pub mod polyline;
pub mod route;
pub mod service;
pub mod web;
