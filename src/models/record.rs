use serde::Serialize;

use crate::models::common::Point2D;

/// 出力単位となる六角形レコード
///
/// フィールドの宣言順がそのまま JSON のキー順（id, x0, y0, points）になります。
/// 中心座標は丸めずに出力し、頂点座標のみ丸めた文字列で保持します。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HexRecord {
    /// 軸座標の識別子 "q,r"
    pub id: String,
    /// 正規化済み中心 x（丸めなし）
    pub x0: f64,
    /// 正規化済み中心 y（丸めなし）
    pub y0: f64,
    /// 6頂点の "x,y" を頂点順に空白区切りで連結した文字列
    pub points: String,
}

impl HexRecord {
    /// points 文字列を座標列に戻す
    #[cfg(test)]
    pub fn parse_points(&self) -> Vec<Point2D> {
        self.points
            .split(' ')
            .filter_map(|pair| {
                let (x, y) = pair.split_once(',')?;
                Some(Point2D::new(x.parse().ok()?, y.parse().ok()?))
            })
            .collect()
    }
}

/// グリッド全体の境界情報
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    /// 正規化前の全頂点の最小値（全座標に適用したシフト量）
    pub raw_min: Point2D,
    /// 正規化後の全頂点の最大値（丸め前）
    pub max: Point2D,
}
