use line_2d::Coord;
use rgb_int::Rgba32;
use sdl2::{pixels::Color, rect::Rect, render::Canvas, video::Window as SdlWindow};
use warble_core::DrawCommand;

fn sdl_color(color: Rgba32) -> Color {
    Color::RGBA(color.r, color.g, color.b, color.a)
}

/// Replay a frame's draw commands onto an SDL2 canvas. Lines are stroked as
/// runs of `width`-sized rects along the rasterized line.
pub fn execute(canvas: &mut Canvas<SdlWindow>, commands: &[DrawCommand]) {
    for command in commands {
        match *command {
            DrawCommand::Clear(color) => {
                canvas.set_draw_color(sdl_color(color));
                canvas.clear();
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                canvas.set_draw_color(sdl_color(color));
                let from = Coord::new(from.0 as i32, from.1 as i32);
                let to = Coord::new(to.0 as i32, to.1 as i32);
                for Coord { x, y } in line_2d::coords_between(from, to) {
                    let _ = canvas.fill_rect(Rect::new(x, y, width, width));
                }
            }
            DrawCommand::FillRect { x, y, w, h, color } => {
                canvas.set_draw_color(sdl_color(color));
                let _ = canvas.fill_rect(Rect::new(x as i32, y as i32, w as u32, h as u32));
            }
        }
    }
}
