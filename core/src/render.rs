use crate::{polygon::PolygonGroup, quantize::Snap, shade::Shader};
use rgb_int::Rgba32;

const OUTLINE_GREY: u8 = 100;
const OUTLINE_ALPHA: u8 = 80;

/// One operation against the drawing surface. A frame is an ordered list of
/// these, replayed by the window crate.
#[derive(Debug, Clone, Copy)]
pub enum DrawCommand {
    Clear(Rgba32),
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: u32,
        color: Rgba32,
    },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba32,
    },
}

/// How the waveform itself is drawn.
#[derive(Debug, Clone, Copy)]
pub enum Style {
    /// A stroked segment between each consecutive sample pair.
    Lines { width: u32 },
    /// A filled square anchored at each sample point.
    Blocks { size: f32 },
}

pub struct FrameRendererBuilder {
    width: Option<f32>,
    height: Option<f32>,
    shader: Option<Shader>,
    style: Option<Style>,
    snap: Option<Snap>,
}

impl FrameRendererBuilder {
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            shader: None,
            style: None,
            snap: None,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn shader(mut self, shader: Shader) -> Self {
        self.shader = Some(shader);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn snap(mut self, snap: Snap) -> Self {
        self.snap = Some(snap);
        self
    }

    pub fn build(self) -> FrameRenderer {
        FrameRenderer {
            width: self.width.unwrap_or(640.0),
            height: self.height.unwrap_or(480.0),
            shader: self.shader.unwrap_or_else(Shader::amber),
            style: self.style.unwrap_or(Style::Lines { width: 1 }),
            snap: self.snap,
        }
    }
}

/// Maps model state to a frame's draw commands: clear to black, decoration
/// outlines underneath, then the waveform mapped across the full canvas
/// width around the vertical midline.
pub struct FrameRenderer {
    width: f32,
    height: f32,
    shader: Shader,
    style: Style,
    snap: Option<Snap>,
}

impl FrameRenderer {
    pub fn builder() -> FrameRendererBuilder {
        FrameRendererBuilder::new()
    }

    pub fn render_frame(
        &self,
        samples: &[f32],
        phase: f32,
        polygons: &[PolygonGroup],
        out: &mut Vec<DrawCommand>,
    ) {
        out.clear();
        out.push(DrawCommand::Clear(Rgba32::new(0, 0, 0, 255)));
        let outline = Rgba32::new(OUTLINE_GREY, OUTLINE_GREY, OUTLINE_GREY, OUTLINE_ALPHA);
        for polygon in polygons {
            for (from, to) in polygon.edges() {
                out.push(DrawCommand::Line {
                    from,
                    to,
                    width: 1,
                    color: outline,
                });
            }
        }
        if samples.len() < 2 {
            return;
        }
        let mid_y = self.height * 0.5;
        let scale_y = self.height * 0.35;
        let step_x = self.width / (samples.len() - 1) as f32;
        let snap = self.snap;
        let snap_coord = move |v: f32| snap.map_or(v, |s| s.apply(v));
        match self.style {
            Style::Lines { width } => {
                for (i, pair) in samples.windows(2).enumerate() {
                    let from = (
                        snap_coord(i as f32 * step_x),
                        snap_coord(mid_y - pair[0] * scale_y),
                    );
                    let to = (
                        snap_coord((i + 1) as f32 * step_x),
                        snap_coord(mid_y - pair[1] * scale_y),
                    );
                    out.push(DrawCommand::Line {
                        from,
                        to,
                        width,
                        color: self.shader.shade(i, phase),
                    });
                }
            }
            Style::Blocks { size } => {
                for (i, sample) in samples.iter().enumerate() {
                    out.push(DrawCommand::FillRect {
                        x: snap_coord(i as f32 * step_x),
                        y: snap_coord(mid_y - sample * scale_y),
                        w: size,
                        h: size,
                        color: self.shader.shade(i, phase),
                    });
                }
            }
        }
    }
}
