use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// The point blocked for the next move only, after a single-stone recapture shape.
/// `illegal` is the color that would be retaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}
