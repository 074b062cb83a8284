use breathing_videos::CourseApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Big Breathing Adventure",
        options,
        Box::new(|cc| Ok(Box::new(CourseApp::new(cc)))),
    )
}

// En la web el arranque es asíncrono y se engancha a un canvas de la página
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .expect("sin objeto window")
            .document()
            .expect("sin document");
        let canvas = document
            .get_element_by_id("course_canvas")
            .expect("falta el elemento #course_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#course_canvas no es un <canvas>");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(CourseApp::new(cc)))),
            )
            .await
            .expect("no se pudo arrancar eframe");
    });
}
