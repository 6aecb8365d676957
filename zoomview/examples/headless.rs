// Copyright 2026 the Zoomview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a `ViewportController` with a scripted gesture and print each frame.
//!
//! Run with `RUST_LOG=zoomview=trace` to see gesture diagnostics.

use kurbo::{Point, Rect};
use zoomview::pointer::event::{Pointer, PointerAction, PointerEvent, PointerId};
use zoomview::transform::MeasureSpec;
use zoomview::{AffineStack, ViewportController};

const ROW_HEIGHT: f64 = 48.0;
const ROWS: usize = 12;

fn two_fingers(action: PointerAction, a: Point, b: Point) -> PointerEvent {
    PointerEvent::new(
        action,
        [Pointer::new(PointerId(0), a), Pointer::new(PointerId(1), b)],
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut vc = ViewportController::default();
    let size = vc.on_measure(MeasureSpec::exactly(360.0), MeasureSpec::exactly(576.0));
    println!("measured {size:?}");

    let a = Point::new(180.0, 200.0);
    let script = [
        PointerEvent::single(PointerAction::Down, PointerId(0), a),
        two_fingers(PointerAction::PointerDown { index: 1 }, a, Point::new(180.0, 300.0)),
        two_fingers(PointerAction::Move, a, Point::new(180.0, 350.0)),
        two_fingers(PointerAction::Move, Point::new(150.0, 170.0), Point::new(180.0, 400.0)),
        two_fingers(
            PointerAction::PointerUp { index: 1 },
            Point::new(150.0, 170.0),
            Point::new(180.0, 400.0),
        ),
        PointerEvent::single(PointerAction::Move, PointerId(0), Point::new(60.0, 20.0)),
        PointerEvent::single(PointerAction::Up, PointerId(0), Point::new(60.0, 20.0)),
    ];

    for (frame, event) in script.iter().enumerate() {
        vc.on_pointer_event(event);
        if !vc.take_redraw_request() {
            continue;
        }

        let mut ctx = AffineStack::new();
        let mut first_visible = None;
        vc.wrap_draw(&mut ctx, |ctx| {
            let view = Rect::new(0.0, 0.0, 360.0, 576.0);
            for row in 0..ROWS {
                let y0 = row as f64 * ROW_HEIGHT;
                let row_rect = Rect::new(0.0, y0, 360.0, y0 + ROW_HEIGHT);
                let rect = ctx.transform().transform_rect_bbox(row_rect);
                if first_visible.is_none() && rect.intersect(view).area() > 0.0 {
                    first_visible = Some(row);
                }
            }
        });

        println!(
            "frame {frame}: scale {:.3} offset ({:.1}, {:.1}) first visible row {:?}",
            vc.scale(),
            vc.offset().x,
            vc.offset().y,
            first_visible,
        );
    }
}
