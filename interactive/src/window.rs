use anyhow::anyhow;
use sdl2::{event::Event, render::Canvas, video::Window as SdlWindow};
use std::{
    thread,
    time::{Duration, Instant},
};

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);

/// The per-frame callback pair driven by [`Window::run`]: `update` advances
/// model state and may fail, which aborts the run; `draw` renders the
/// current state onto the canvas and cannot.
pub trait App {
    fn update(&mut self) -> anyhow::Result<()>;
    fn draw(&mut self, canvas: &mut Canvas<SdlWindow>);
}

pub struct WindowBuilder {
    title: Option<String>,
    width_px: Option<u32>,
    height_px: Option<u32>,
}

impl WindowBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            width_px: None,
            height_px: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn width_px(mut self, width_px: u32) -> Self {
        self.width_px = Some(width_px);
        self
    }

    pub fn height_px(mut self, height_px: u32) -> Self {
        self.height_px = Some(height_px);
        self
    }

    pub fn build(self) -> Window {
        Window {
            title: self.title.unwrap_or_else(|| "Warble".to_string()),
            width_px: self.width_px.unwrap_or(640),
            height_px: self.height_px.unwrap_or(480),
        }
    }
}

pub struct Window {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
}

impl Window {
    pub fn builder() -> WindowBuilder {
        WindowBuilder::new()
    }

    /// Open the window and drive `app` at a fixed 60Hz until the window is
    /// closed or `update` fails. Failure to bring up the graphics backend
    /// is the one fatal error path; it propagates out of here.
    pub fn run(&self, app: &mut impl App) -> anyhow::Result<()> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(self.title.as_str(), self.width_px, self.height_px)
            .position_centered()
            .build()?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        // The logical canvas stays fixed even if the OS hands us a
        // different-sized window.
        canvas.set_logical_size(self.width_px, self.height_px)?;
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!(
            "opened {}x{} window \"{}\"",
            self.width_px,
            self.height_px,
            self.title
        );
        'running: loop {
            let frame_start = Instant::now();
            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    _ => (),
                }
            }
            app.update()?;
            app.draw(&mut canvas);
            canvas.present();
            let since_frame_start = frame_start.elapsed();
            if let Some(until_next_frame) = FRAME_DURATION.checked_sub(since_frame_start) {
                thread::sleep(until_next_frame);
            }
        }
        Ok(())
    }
}
