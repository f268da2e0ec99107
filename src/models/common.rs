use std::ops::{Add, Sub};

/// 2次元平面上の点を表す構造体
///
/// 中心点・頂点のどちらも同じ座標空間で扱います。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 各成分を指定桁数で丸めた点を返す
    pub fn rounded(&self, precision: u32) -> Self {
        Self::new(
            math_utils::round_to(self.x, precision),
            math_utils::round_to(self.y, precision),
        )
    }

    /// 成分ごとの最小値
    pub fn component_min(&self, other: &Point2D) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// 成分ごとの最大値
    pub fn component_max(&self, other: &Point2D) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// "x,y" 形式の文字列に変換
    ///
    /// ロケールに依存せず、往復可能な最短の10進表現（例: `0.0`, `1.73`）を使います。
    pub fn to_pair_string(&self) -> String {
        format!("{:?},{:?}", self.x, self.y)
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// 数学ユーティリティ関数
pub mod math_utils {
    /// 小数点以下 `precision` 桁に丸める（0.5は0から遠い方へ）
    pub fn round_to(value: f64, precision: u32) -> f64 {
        let factor = 10f64.powi(precision as i32);
        let rounded = (value * factor).round() / factor;
        // -0.0 は "-0.0" と出力されてしまうため正のゼロに揃える
        if rounded == 0.0 { 0.0 } else { rounded }
    }

    /// 一周を `n` 等分した角度（ラジアン）。最後の 2π は含まない
    pub fn full_turn_angles(n: usize) -> Vec<f64> {
        let step = 2.0 * std::f64::consts::PI / n as f64;
        (0..n).map(|k| k as f64 * step).collect()
    }
}
