/*
    Chart Studio - visual chart editor widgets
    Copyright (C) 2025 meetzli

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Invalid zoom factor: {0}")]
    InvalidZoom(f64),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
