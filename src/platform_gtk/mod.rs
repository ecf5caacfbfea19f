use gtk4 as gtk;

use crate::api::PieChartEngine;
use crate::render::Renderer;

pub struct GtkPieChartAdapter<R: Renderer> {
    _engine: PieChartEngine<R>,
}

impl<R: Renderer> GtkPieChartAdapter<R> {
    #[must_use]
    pub fn new(engine: PieChartEngine<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self { _engine: engine }
    }
}
