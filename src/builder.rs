//! # Builder モジュール
//!
//! 六角形グリッドの幾何計算を行うジェネレータ本体を提供します。
//!
//! 軸座標のグリッドから各六角形の中心点と6つの頂点を求め、全頂点の最小値で
//! 座標を平行移動（正規化）して、フロントエンドが読み込むレコード列を生成します。
//! 計算は1パスで完結し、同じ設定からは常に同じ結果が得られます。
//!
//! ## 処理順序
//!
//! 1. **座標生成**: q を外側、r を内側として全軸座標を列挙
//! 2. **中心点計算**: 軸座標から直交座標の中心点を計算
//! 3. **頂点展開**: 各中心点の周囲に単位半径の頂点を6つ生成
//! 4. **最小値計算**: 全頂点を通した x, y の最小値（グリッド全体で1組）
//! 5. **正規化**: 中心点・頂点の両方から最小値を引く
//! 6. **丸め・集約**: 頂点のみ丸め、六角形ごとに "x,y" を連結
//! 7. **整列**: id の文字列順に並べる
//!
//! ## 使用例
//!
//! ```ignore
//! let builder = HexGridBuilder::new(6, 6, 2);
//! let grid = builder.build();
//! assert_eq!(grid.records.len(), 36);
//! ```

use crate::config::GeneratorConfig;
use crate::models::*;
use tracing::{debug, info, trace};

/// 六角形グリッドのジェネレータ
#[derive(Debug, Clone)]
pub struct HexGridBuilder {
    /// q 方向の六角形数
    pub width: u32,
    /// r 方向の六角形数
    pub height: u32,
    /// 頂点座標の丸め桁数
    pub precision: u32,
}

/// 生成結果
#[derive(Debug, Clone)]
pub struct HexGrid {
    /// id 順に並んだ六角形レコード
    pub records: Vec<HexRecord>,
    /// 正規化のシフト量と正規化後の最大値
    pub bounds: GridBounds,
}

impl HexGridBuilder {
    pub fn new(width: u32, height: u32, precision: u32) -> Self {
        Self {
            width,
            height,
            precision,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.grid.width, config.grid.height, config.output.precision)
    }

    /// グリッド全体を計算してレコード列を返す
    pub fn build(&self) -> HexGrid {
        info!(
            width = self.width,
            height = self.height,
            precision = self.precision,
            "六角形グリッドを生成中..."
        );

        let coordinates = self.generate_coordinates();
        let centers = compute_centers(&coordinates);
        let corners = explode_corners(&centers);
        debug!(
            "座標: {}件, 頂点: {}件",
            coordinates.len(),
            corners.len()
        );

        let raw_min = global_min(&corners);
        debug!("正規化シフト量: ({:?}, {:?})", raw_min.x, raw_min.y);

        let centers: Vec<HexCenter> = centers
            .into_iter()
            .map(|center| HexCenter {
                position: center.position - raw_min,
                ..center
            })
            .collect();
        let corners: Vec<HexCorner> = corners
            .into_iter()
            .map(|corner| HexCorner {
                position: corner.position - raw_min,
                ..corner
            })
            .collect();

        let bounds = GridBounds {
            raw_min,
            max: global_max(&corners),
        };

        let records = self.aggregate(&centers, &corners);
        info!("生成完了: {}件のレコード", records.len());

        HexGrid { records, bounds }
    }

    fn generate_coordinates(&self) -> Vec<AxialCoordinate> {
        AxialCoordinate::grid(self.width, self.height)
    }

    /// 頂点を丸めて六角形ごとに集約し、id 順に並べる
    fn aggregate(&self, centers: &[HexCenter], corners: &[HexCorner]) -> Vec<HexRecord> {
        let mut grouped: Vec<Vec<&HexCorner>> =
            vec![Vec::with_capacity(CORNERS_PER_HEX); centers.len()];
        for corner in corners {
            grouped[corner.parent].push(corner);
        }

        let mut records: Vec<HexRecord> = centers
            .iter()
            .zip(grouped)
            .map(|(center, mut group)| {
                group.sort_by_key(|corner| corner.order);
                let points = group
                    .iter()
                    .map(|corner| corner.position.rounded(self.precision).to_pair_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                let record = HexRecord {
                    id: center.coordinate.id(),
                    x0: center.position.x,
                    y0: center.position.y,
                    points,
                };
                trace!(id = %record.id, points = %record.points, "レコード");
                record
            })
            .collect();

        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }
}

impl HexGrid {
    /// 正規化後の最大座標をオペレータ向けに表示
    ///
    /// 出力ファイルの内容には影響しません。
    pub fn report_bounds(&self) {
        info!(max_x = self.bounds.max.x, max_y = self.bounds.max.y, "グリッド境界");
        println!("Max x: {:?}", self.bounds.max.x);
        println!("Max y: {:?}", self.bounds.max.y);
    }
}

fn compute_centers(coordinates: &[AxialCoordinate]) -> Vec<HexCenter> {
    coordinates.iter().map(AxialCoordinate::to_center).collect()
}

/// 中心点ごとに6頂点へ展開（親インデックスと頂点順を付与）
fn explode_corners(centers: &[HexCenter]) -> Vec<HexCorner> {
    centers
        .iter()
        .enumerate()
        .flat_map(|(index, center)| center.corners(index))
        .collect()
}

fn global_min(corners: &[HexCorner]) -> Point2D {
    corners.iter().fold(
        Point2D::new(f64::INFINITY, f64::INFINITY),
        |acc, corner| acc.component_min(&corner.position),
    )
}

fn global_max(corners: &[HexCorner]) -> Point2D {
    corners.iter().fold(
        Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        |acc, corner| acc.component_max(&corner.position),
    )
}
