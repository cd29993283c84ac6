//! Tests for the rendering engine

use super::*;

mod helpers;

mod resolve;
