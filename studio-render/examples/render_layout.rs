use serde_json::json;
use studio_core::{CanvasState, Coordinate, DropEvent, HandleType, Position, PreviewItem, Size, Zoom};
use studio_render::Thumbnailer;
use std::fs::File;
use std::io::Write;

fn main() {
    println!("Building layout...");

    let mut canvas = CanvasState::default();
    let revenue = canvas.append(
        json!({ "title": { "text": "Revenue" }, "color": "#5470c6" }),
        Position::new(40.0, 40.0, 0),
        Size::new(360.0, 240.0),
    );
    canvas.handle_drop(
        &DropEvent::preview(
            PreviewItem {
                name: "Pie".into(),
                option: json!({ "title": { "text": "Share" }, "color": "#fac858" }),
            },
            Coordinate::new(640.0, 260.0),
        ),
        Coordinate::new(0.0, 0.0),
        Zoom::ONE,
    );

    canvas.select(revenue);
    canvas.pointer_down(HandleType::BottomRight, Coordinate::new(400.0, 280.0));
    canvas.pointer_move(Coordinate::new(460.0, 380.0), Zoom::ONE);
    canvas.pointer_up();
    canvas.duplicate_selected();

    let layout = canvas.layout(960, 540, "#f5f7fa");
    println!("{} charts", layout.charts.len());

    let mut thumbnailer = Thumbnailer::new().with_stroke_width(2.0);

    let iterations = 200;
    println!("Starting stress test ({} iterations)...", iterations);
    let start_stress = std::time::Instant::now();

    for _ in 0..iterations {
        let _ = thumbnailer.render_raw(&layout, 0.5).expect("Failed to render");
    }

    let total_duration = start_stress.elapsed();
    println!("Stress test finished in {:?}", total_duration);
    println!("Average render time: {:?}", total_duration / iterations);

    let output_bytes = thumbnailer.render(&layout, 0.5).expect("Failed to render");
    let mut file = File::create("layout_thumbnail.png").expect("Failed to create file");
    file.write_all(&output_bytes).expect("Failed to write file");
    println!("Saved to layout_thumbnail.png");
}
