//! UI loop for the viewer: texture refresh, controls, and the image panel.

use eframe::egui::{self, Sense, TextureOptions, Vec2};

use super::state::ViewerApp;
use super::types::ContrastWindow;
use crate::ui::RangeSlider;
use crate::util::format_value;
use crate::viz;

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_display(ctx);

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.controls_ui(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.image_ui(ui);
        });
    }
}

impl ViewerApp {
    /// Regenerate the displayed buffer and its texture when the frame index
    /// or contrast window changed since the last frame. One full elementwise
    /// scan of the selected frame per interaction, nothing otherwise.
    fn refresh_display(&mut self, ctx: &egui::Context) {
        let params = self.params();
        if self.texture.is_some() && self.texture_params == Some(params) {
            return;
        }

        self.display_buffer = self.displayed();
        let image = viz::grayscale_image(
            &self.display_buffer,
            self.stack.width(),
            self.stack.height(),
            self.window,
        );
        self.texture = Some(ctx.load_texture("slice", image, TextureOptions::NEAREST));
        self.texture_params = Some(params);
    }

    /// Slice and contrast controls, stacked below the image.
    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);

        if self.show_slice_control {
            let last = self.stack.frame_count() - 1;
            ui.add(
                egui::Slider::new(&mut self.frame_index, 0..=last)
                    .integer()
                    .text("Slice"),
            );
        }

        let (min, max) = self.stack.value_range();
        ui.add(
            RangeSlider::new(&mut self.window.low, &mut self.window.high, min, max)
                .step(ContrastWindow::step_for(min, max))
                .text("Contrast"),
        );

        ui.add_space(4.0);
    }

    /// The image itself, aspect-fit to the available space, with an
    /// x / y / value readout under the pointer.
    fn image_ui(&mut self, ui: &mut egui::Ui) {
        let Some(texture) = &self.texture else {
            return;
        };

        let width = self.stack.width();
        let height = self.stack.height();
        let avail = ui.available_size();
        let scale = (avail.x / width as f32).min(avail.y / height as f32);
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        let size = Vec2::new(width as f32 * scale, height as f32 * scale);

        let response = ui.add(
            egui::Image::new(texture)
                .fit_to_exact_size(size)
                .sense(Sense::hover()),
        );

        if let Some(pos) = response.hover_pos() {
            let rect = response.rect;
            let x = (((pos.x - rect.left()) / rect.width()) * width as f32) as usize;
            let y = (((pos.y - rect.top()) / rect.height()) * height as f32) as usize;
            let x = x.min(width - 1);
            let y = y.min(height - 1);
            let value = self.display_buffer[y * width + x];
            response.on_hover_text(format!("x: {x}  y: {y}  value: {}", format_value(value)));
        }
    }
}
