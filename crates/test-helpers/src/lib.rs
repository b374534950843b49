// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod codeword;
mod points_writer;
mod utils;

pub use codeword::*;
pub use points_writer::*;
pub use utils::*;
