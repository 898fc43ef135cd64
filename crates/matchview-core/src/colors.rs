//! 匹配着色（双色相区间按宽度比例分配）
//!
//! 色相取自两个互不相交的区间，避开中间难以区分的区域：
//! - 区间 A：[20°, 80°)
//! - 区间 B：[160°, 340°)
//!
//! A 区间分得 `round(count * 宽A / (宽A + 宽B))` 个颜色，其余归 B。
//! 区间内等距取点，不含右端点；输出顺序为先 A 后 B。
use serde::Deserialize;

use crate::error::{ComparisonError, Result};
use crate::types::Color;

/// 色相区间 [start, end)，单位为度
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HueBand {
    pub start: f64,
    pub end: f64,
}

impl HueBand {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// 调色板参数（可由 TOML 配置覆盖）
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub first_band: HueBand,
    pub second_band: HueBand,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            first_band: HueBand::new(20.0, 80.0),
            second_band: HueBand::new(160.0, 340.0),
            saturation: 0.8,
            lightness: 0.5,
            alpha: 0.3,
        }
    }
}

impl Palette {
    /// 校验区间与通道取值
    pub fn validate(&self) -> Result<()> {
        for (label, band) in [("first_band", self.first_band), ("second_band", self.second_band)] {
            if !(0.0..=360.0).contains(&band.start) || !(0.0..=360.0).contains(&band.end) {
                return Err(ComparisonError::Palette(format!("{label} must lie within [0, 360]")));
            }
            if band.start >= band.end {
                return Err(ComparisonError::Palette(format!("{label} is empty")));
            }
        }
        let (a, b) = (self.first_band, self.second_band);
        if a.start < b.end && b.start < a.end {
            return Err(ComparisonError::Palette("hue bands overlap".to_string()));
        }
        for (label, v) in [("saturation", self.saturation), ("lightness", self.lightness), ("alpha", self.alpha)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(ComparisonError::Palette(format!("{label} must lie within [0, 1]")));
            }
        }
        Ok(())
    }

    /// 第一区间应分得的颜色数
    pub fn first_band_count(&self, count: usize) -> usize {
        let (wa, wb) = (self.first_band.width(), self.second_band.width());
        (count as f64 * wa / (wa + wb)).round() as usize
    }

    /// 生成 `count` 个颜色
    pub fn generate(&self, count: usize) -> Vec<Color> {
        let in_first = self.first_band_count(count).min(count);
        let in_second = count - in_first;

        let mut hues = generate_hues_for_interval(self.first_band.start, self.first_band.end, in_first);
        hues.extend(generate_hues_for_interval(self.second_band.start, self.second_band.end, in_second));

        hues.into_iter()
            .map(|hue| Hsla { hue, saturation: self.saturation, lightness: self.lightness, alpha: self.alpha }.to_color())
            .collect()
    }
}

/// 使用默认调色板生成 `count` 个颜色
pub fn generate_colors(count: usize) -> Vec<Color> {
    Palette::default().generate(count)
}

/// 在 [start, end) 内等距取 `count` 个色相（保留完整精度）
pub fn generate_hues_for_interval(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = (end - start) / count as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// HSLA 颜色分量；饱和度/亮度/透明度取 [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// 色相按 f64 最短表示输出，不同色相得到不同字符串
    pub fn to_color(&self) -> Color {
        Color(format!(
            "hsla({}, {}%, {}%, {})",
            self.hue,
            round2(self.saturation * 100.0),
            round2(self.lightness * 100.0),
            round2(self.alpha),
        ))
    }
}

/// 通道值取两位小数，避免 0.8 * 100 之类的浮点尾数
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "colors_test.rs"]
mod tests;
