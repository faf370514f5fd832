use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::mosaic::controller::{FrameReport, MosaicController};
use crate::input::gui::commands::run_gui::GuiError;
use crate::input::gui::keyboard::KeyboardState;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    presenter: PixelsPresenter,
    controller: MosaicController,
    keyboard: KeyboardState,
    last_report: Option<FrameReport>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        event_loop: &EventLoop<()>,
        window: &Window,
        presenter: PixelsPresenter,
        controller: MosaicController,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            controller,
            keyboard: KeyboardState::default(),
            last_report: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window is closed. A render or resize error closes the
    /// window and the first one is returned.
    pub fn run(mut self, event_loop: EventLoop<()>, window: &'static Window) -> Result<(), GuiError> {
        let mut failure = None;

        event_loop.run(|event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let egui_consumed = self.handle_window_event(window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            self.controller.shutdown();
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput {
                            event: key_event, ..
                        } if !egui_consumed => {
                            if let PhysicalKey::Code(key_code) = key_event.physical_key {
                                self.keyboard.handle_key_event(key_code, key_event.state);
                            }
                        }
                        WindowEvent::Focused(false) => {
                            self.keyboard.reset();
                        }
                        WindowEvent::Resized(size) => {
                            if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                                error!("cannot resize surface: {}", err);
                                self.controller.shutdown();
                                keep_first(&mut failure, GuiError::Resize(err));
                                elwt.exit();
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            self.last_report =
                                Some(self.controller.tick(&self.keyboard, &mut self.presenter));

                            let mut egui_output = self.update_ui(window);
                            let platform_output = std::mem::take(&mut egui_output.platform_output);
                            self.egui_state
                                .handle_platform_output(window, platform_output);

                            if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                                error!("render error: {}", err);
                                self.controller.shutdown();
                                keep_first(&mut failure, GuiError::Render(err));
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    window.request_redraw();
                }
                _ => {}
            }
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let grid = self.controller.grid();
        let (columns, rows) = (grid.columns(), grid.rows());
        let fps = self.controller.last_fps();
        let report = self.last_report;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mosaic")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 160.0])
                .show(ctx, |ui| {
                    match fps {
                        Some(fps) => ui.label(format!("FPS: {}", fps)),
                        None => ui.label("FPS: -"),
                    };

                    if let Some(report) = report {
                        let view = report.view;
                        ui.label(format!(
                            "Position: ({:.6}, {:.6})",
                            view.position.real, view.position.imag
                        ));
                        ui.label(format!("Zoom: {:.3e}", view.zoom));
                        ui.label(format!("Iterations: {}", view.iteration_cap));
                        ui.label(format!(
                            "Fresh tiles: {}/{}",
                            report.drain.received,
                            report.drain.received + report.drain.pending
                        ));
                    }

                    ui.label(format!("Grid: {}x{}", columns, rows));
                    ui.separator();
                    ui.label("Arrows pan, PgUp/PgDn zoom, Home/End depth");
                });
        })
    }
}

fn keep_first(slot: &mut Option<GuiError>, err: GuiError) {
    if slot.is_none() {
        *slot = Some(err);
    }
}
