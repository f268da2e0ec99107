// 基本的なデータ型と数学ユーティリティ
pub mod common;

// 軸座標・中心点・頂点
pub mod hex;

// 出力レコード
pub mod record;

// 便利な re-export
pub use common::*;
pub use hex::{AxialCoordinate, HexCenter, HexCorner, CORNERS_PER_HEX};
pub use record::{GridBounds, HexRecord};
