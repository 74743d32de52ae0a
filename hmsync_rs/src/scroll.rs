//! Scroll-linked transforms.
//!
//! A [`Transform`] is a pure piecewise-linear function from [`ScrollProgress`]
//! to a number (pixels, opacity, scale). The page samples it on every scroll
//! event; nothing is cached between samples, so a reload always starts from
//! progress 0.

use std::fmt::Write as _;

use thiserror::Error;

/// Normalized page scroll position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamp `value` into `[0, 1]`. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Progress of a scroll offset through the scrollable range.
    ///
    /// A page that fits the viewport (no scrollable range) is at 0.
    pub fn from_viewport(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Self {
        let range = scroll_height - viewport_height;
        if range.is_nan() || range <= 0.0 {
            return Self::START;
        }
        Self::new(scroll_y / range)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("input and output ranges differ in length ({inputs} vs {outputs})")]
    LengthMismatch { inputs: usize, outputs: usize },
    #[error("a transform needs at least two control points, got {0}")]
    TooFewPoints(usize),
    #[error("control point {index} is not finite")]
    NotFinite { index: usize },
    #[error("input range must be strictly ascending (point {index})")]
    NotAscending { index: usize },
}

/// Piecewise-linear mapping between control points.
///
/// Outside the input range the first/last output is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
}

impl Transform {
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, TransformError> {
        if inputs.len() != outputs.len() {
            return Err(TransformError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(TransformError::TooFewPoints(inputs.len()));
        }
        if let Some(index) = inputs
            .iter()
            .zip(outputs)
            .position(|(i, o)| !i.is_finite() || !o.is_finite())
        {
            return Err(TransformError::NotFinite { index });
        }
        if let Some(index) = inputs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(TransformError::NotAscending { index: index + 1 });
        }
        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
        })
    }

    /// Two-point shorthand used by every mapping on the page.
    pub(crate) fn linear(from: (f64, f64), to: (f64, f64)) -> Self {
        Self {
            inputs: vec![from.0, to.0],
            outputs: vec![from.1, to.1],
        }
    }

    pub fn sample(&self, progress: ScrollProgress) -> f64 {
        let x = progress.get();
        let last = self.inputs.len() - 1;

        if x <= self.inputs[0] {
            return self.outputs[0];
        }
        if x >= self.inputs[last] {
            return self.outputs[last];
        }

        let seg = self
            .inputs
            .windows(2)
            .position(|w| x >= w[0] && x <= w[1])
            .unwrap_or(last - 1);
        let (x0, x1) = (self.inputs[seg], self.inputs[seg + 1]);
        let (y0, y1) = (self.outputs[seg], self.outputs[seg + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

/// Presentational properties of one animated layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LayerStyle {
    pub const IDENTITY: LayerStyle = LayerStyle {
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn translated(translate_y: f64) -> Self {
        Self {
            translate_y,
            ..Self::IDENTITY
        }
    }

    pub fn faded(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
    }

    /// Inline CSS for the layer. Identity components are omitted.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if self.translate_y != 0.0 || self.scale != 1.0 {
            css.push_str("transform:");
            if self.translate_y != 0.0 {
                let _ = write!(css, " translateY({:.2}px)", self.translate_y);
            }
            if self.scale != 1.0 {
                let _ = write!(css, " scale({:.4})", self.scale);
            }
            css.push(';');
        }
        if self.opacity != 1.0 {
            let _ = write!(css, "opacity:{:.4};", self.opacity);
        }
        css
    }
}

/// Styles of the hero's three scroll-driven layers at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroStyles {
    /// Gradient backdrop, also reused behind the value-proposition section.
    pub back_layer: LayerStyle,
    /// Radial highlight over the backdrop.
    pub front_layer: LayerStyle,
    /// Headline, copy and call-to-action buttons.
    pub content: LayerStyle,
}

/// The hero's scroll mappings.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroParallax {
    pub back_layer_y: Transform,
    pub front_layer_y: Transform,
    pub content_opacity: Transform,
}

impl Default for HeroParallax {
    fn default() -> Self {
        Self {
            back_layer_y: Transform::linear((0.0, 0.0), (1.0, -200.0)),
            front_layer_y: Transform::linear((0.0, 0.0), (1.0, -100.0)),
            content_opacity: Transform::linear((0.0, 1.0), (0.3, 0.0)),
        }
    }
}

impl HeroParallax {
    pub fn styles(&self, progress: ScrollProgress) -> HeroStyles {
        HeroStyles {
            back_layer: LayerStyle::translated(self.back_layer_y.sample(progress)),
            front_layer: LayerStyle::translated(self.front_layer_y.sample(progress)),
            content: LayerStyle::faded(self.content_opacity.sample(progress)),
        }
    }
}
