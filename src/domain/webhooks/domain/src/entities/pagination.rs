// Copyright Folio Systems Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOpts {
    pub limit: usize,
    pub offset: usize,
}

impl PaginationOpts {
    pub fn all() -> Self {
        Self {
            limit: usize::MAX,
            offset: 0,
        }
    }

    pub fn from_page(page: usize, per_page: usize) -> Self {
        Self {
            limit: per_page,
            offset: page * per_page,
        }
    }
}

impl Default for PaginationOpts {
    fn default() -> Self {
        Self::all()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
