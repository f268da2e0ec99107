use crate::models::common::{Point2D, math_utils};

/// 六角形1つあたりの頂点数
pub const CORNERS_PER_HEX: usize = 6;

/// 軸座標系 (q, r) で六角形を識別する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxialCoordinate {
    pub q: i32,
    pub r: i32,
}

impl AxialCoordinate {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// 出力用の識別子 "q,r"
    pub fn id(&self) -> String {
        format!("{},{}", self.q, self.r)
    }

    /// 幅 `width` × 高さ `height` の矩形グリッドを列挙
    ///
    /// q を外側、r を内側のループとして並べます。戻り値の添字がそのまま
    /// 各座標の安定したインデックスになります。
    pub fn grid(width: u32, height: u32) -> Vec<AxialCoordinate> {
        let mut coordinates = Vec::with_capacity(width as usize * height as usize);
        for q in 0..width as i32 {
            for r in 0..height as i32 {
                coordinates.push(AxialCoordinate::new(q, r));
            }
        }
        coordinates
    }

    /// 軸座標から直交座標系の中心点を計算
    ///
    /// x0 = √3·q + (√3/2)·r, y0 = (3/2)·r（外接円半径 1 の pointy-top 配置）
    pub fn to_center(&self) -> HexCenter {
        let sqrt3 = 3.0_f64.sqrt();
        let q = self.q as f64;
        let r = self.r as f64;
        HexCenter {
            coordinate: *self,
            position: Point2D::new(sqrt3 * q + sqrt3 / 2.0 * r, 3.0 / 2.0 * r),
        }
    }
}

/// 六角形の中心点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCenter {
    pub coordinate: AxialCoordinate,
    pub position: Point2D,
}

impl HexCenter {
    /// 中心点の周囲に6つの頂点を生成（頂点順 0..5）
    pub fn corners(&self, parent: usize) -> Vec<HexCorner> {
        corner_offsets()
            .into_iter()
            .enumerate()
            .map(|(order, offset)| HexCorner {
                parent,
                order,
                position: self.position + offset,
            })
            .collect()
    }
}

/// 六角形の頂点
///
/// `parent` は元になった座標のインデックス、`order` は頂点順。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCorner {
    pub parent: usize,
    pub order: usize,
    pub position: Point2D,
}

/// 単位半径の頂点オフセット
///
/// 一周を等分した角度 θk = 2πk/6 について (sin θk, cos θk) を返すため、
/// 頂点0は真上 (0, 1) から時計回りに並びます。
pub fn corner_offsets() -> Vec<Point2D> {
    math_utils::full_turn_angles(CORNERS_PER_HEX)
        .into_iter()
        .map(|angle| Point2D::new(angle.sin(), angle.cos()))
        .collect()
}
