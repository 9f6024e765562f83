use sdl2::{render::Canvas, video::Window as SdlWindow};
use warble_core::{DrawCommand, FrameRenderer, RandomWalk, Scope, Shader, Style};
use warble_interactive::{
    draw,
    window::{App, Window},
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const NUM_SAMPLES: usize = 320;

struct LinesBrightFloor {
    scope: Scope,
    renderer: FrameRenderer,
    commands: Vec<DrawCommand>,
    rng: rand::rngs::ThreadRng,
}

impl App for LinesBrightFloor {
    fn update(&mut self) -> anyhow::Result<()> {
        self.scope.advance(&mut self.rng);
        Ok(())
    }

    fn draw(&mut self, canvas: &mut Canvas<SdlWindow>) {
        self.renderer.render_frame(
            self.scope.samples(),
            self.scope.phase(),
            &[],
            &mut self.commands,
        );
        draw::execute(canvas, &self.commands);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut app = LinesBrightFloor {
        scope: Scope::new(
            NUM_SAMPLES,
            RandomWalk {
                reseed_span: 0.25,
                step_span: 0.08,
            },
            0.1,
        ),
        renderer: FrameRenderer::builder()
            .width(WIDTH as f32)
            .height(HEIGHT as f32)
            .shader(Shader::amber_floored())
            .style(Style::Lines { width: 2 })
            .build(),
        commands: Vec::new(),
        rng: rand::rng(),
    };
    let window = Window::builder()
        .title("warble: lines (floored brightness)")
        .width_px(WIDTH)
        .height_px(HEIGHT)
        .build();
    window.run(&mut app)
}
