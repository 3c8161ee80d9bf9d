//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP endpoints, verifying
//! status codes, response bodies and error mapping for the generic CRUD endpoints and the
//! hand-written ones.

mod character_jutsu;
mod crud;
mod root;

use axum::http::StatusCode;
use konoha_test_utils::prelude::*;
use serde_json::json;

use crate::util::{send, send_raw, TestContextExt};
