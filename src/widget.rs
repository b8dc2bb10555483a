use crate::field::DotField;
use crate::graphics;
use crate::state::AppState;
use crate::theme::{FilePreferences, Theme, ThemeController};
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{InterpolationMode, Text, TextLayout, TextLayoutBuilder},
    Color, RenderContext, Selector, Widget,
};
use std::time::Instant;

/// Opaque request to hand the current view to the host's print facility.
pub const PRINT: Selector = Selector::new("dotfield.print");

/// Animated dot-grid widget
pub struct DotFieldWidget {
    field: DotField,
    controller: ThemeController<FilePreferences>,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
    /// Widget size
    size: Size,
}

impl DotFieldWidget {
    pub fn new(spacing: f64, mouse_radius: f64, store: FilePreferences) -> Self {
        DotFieldWidget {
            field: DotField::new(spacing, mouse_radius),
            controller: ThemeController::new(store),
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
            size: Size::ZERO,
        }
    }

    fn resize(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.field.rebuild(size.width, size.height);
        }
    }
}

fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}

impl Widget<AppState> for DotFieldWidget {
    /// Handle events for the dot-grid widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_timer(std::time::Duration::from_millis(16));
                // Request focus to receive keyboard events
                ctx.request_focus();
                self.controller.initialize(data, system_prefers_dark());
                ctx.request_paint();
            }
            Event::Timer(_) => {
                self.field.tick(data.pointer);
                ctx.request_paint();
                ctx.request_timer(std::time::Duration::from_millis(16));
            }
            Event::MouseMove(mouse_event) => {
                data.pointer = mouse_event.pos;
            }
            Event::KeyDown(key_event) => {
                if let druid::keyboard_types::Key::Character(s) = &key_event.key {
                    match s.as_str() {
                        "t" | "T" => {
                            self.controller.toggle(data);
                            ctx.request_paint();
                        }
                        "p" | "P" => {
                            // Handled by the app delegate as an opaque
                            // external call.
                            ctx.submit_command(PRINT);
                        }
                        "d" | "D" => {
                            data.debug = !data.debug;
                            ctx.request_paint();
                        }
                        "q" | "Q" => {
                            ctx.submit_command(commands::QUIT_APP);
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
        if let LifeCycle::Size(size) = event {
            self.resize(*size);
        }
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the dot-grid widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        let size = bc.max();
        self.resize(size);
        size
    }

    /// Paint the dot grid
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;
        if width == 0 || height == 0 {
            return;
        }

        // Full clear every frame, then all dots in grid order
        let mut pixel_data = vec![0u8; width * height * 4];
        graphics::clear(&mut pixel_data, data.theme.background());
        self.field
            .draw(&mut pixel_data, width, height, data.dot_color);

        // Create and draw the image
        let image = ctx
            .make_image(
                width,
                height,
                &pixel_data,
                druid::piet::ImageFormat::RgbaSeparate,
            )
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        let text_color = match data.theme {
            Theme::Light => Color::rgb8(40, 40, 40),
            Theme::Dark => Color::WHITE,
        };

        // Draw the theme toggle indicator in the top-right corner
        let text_layout = ctx
            .text()
            .new_text_layout(data.icon.glyph())
            .font(FontFamily::SYSTEM_UI, 24.0)
            .text_color(text_color)
            .build()
            .unwrap();
        ctx.draw_text(&text_layout, (size.width - 40.0, 10.0));

        // Add debug info if debug mode is enabled
        if data.debug {
            // Draw program name and version
            let text = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(text_color)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 10.0));

            // Draw FPS
            let text = format!("FPS: {:.2}", self.fps);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(text_color)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 30.0));

            // Draw dot count
            let text = format!("Dots: {}", self.field.len());
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(text_color)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 50.0));

            // Draw active theme
            let text = format!("Theme: {}", data.theme.as_str());
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(text_color)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 70.0));
        }
    }
}
