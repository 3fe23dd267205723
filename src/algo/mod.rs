/*!
# Graph Statistics & Checks

Algorithm traits implemented directly on graphs, usable without configuring
anything beforehand: connectivity testing (`graph.is_connected()`) and the
clustering-coefficient statistics used to evaluate generated networks.
*/

use crate::{ops::*, *};

mod clustering;
mod connectivity;

pub use clustering::*;
pub use connectivity::*;
