use sdl2::{render::Canvas, video::Window as SdlWindow};
use warble_core::{DrawCommand, FrameRenderer, PolygonGroup, RandomWalk, Scope, Shader, Style};
use warble_interactive::{
    draw,
    window::{App, Window},
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const NUM_SAMPLES: usize = 320;
const NUM_POLYGONS: u64 = 5;

struct DriftingPolygons {
    scope: Scope,
    polygons: Vec<PolygonGroup>,
    renderer: FrameRenderer,
    commands: Vec<DrawCommand>,
    rng: rand::rngs::ThreadRng,
}

impl App for DriftingPolygons {
    fn update(&mut self) -> anyhow::Result<()> {
        self.scope.advance(&mut self.rng);
        for polygon in &mut self.polygons {
            polygon.advance(WIDTH as f32, HEIGHT as f32, &mut self.rng);
        }
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas<SdlWindow>) {
        self.renderer.render_frame(
            self.scope.samples(),
            self.scope.phase(),
            &self.polygons,
            &mut self.commands,
        );
        draw::execute(canvas, &self.commands);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut rng = rand::rng();
    // Each shape gets its own seed so it looks the same on every run, even
    // though its motion does not.
    let polygons = (1..=NUM_POLYGONS)
        .map(|seed| PolygonGroup::generate(seed, WIDTH as f32, HEIGHT as f32, &mut rng))
        .collect();
    let mut app = DriftingPolygons {
        scope: Scope::new(
            NUM_SAMPLES,
            RandomWalk {
                reseed_span: 0.25,
                step_span: 0.08,
            },
            0.1,
        ),
        polygons,
        renderer: FrameRenderer::builder()
            .width(WIDTH as f32)
            .height(HEIGHT as f32)
            .shader(Shader::amber())
            .style(Style::Lines { width: 1 })
            .build(),
        commands: Vec::new(),
        rng,
    };
    let window = Window::builder()
        .title("warble: drifting polygons")
        .width_px(WIDTH)
        .height_px(HEIGHT)
        .build();
    window.run(&mut app)
}
