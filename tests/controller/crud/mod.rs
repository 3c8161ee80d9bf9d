//! Tests for the generic CRUD endpoints, driven through the full router for each resource.

mod character;
mod clan;

use super::*;
