// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod dedup;
pub mod exposure;
pub mod relevance;
pub mod scan_service;
