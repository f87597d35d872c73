//! Minimal end-to-end demo: an in-memory widget tree, a toy scheduler
//! that interpolates linearly, and two widgets sliding/fading via a
//! single descriptor.
//!
//! Run with `cargo run -p tween-scene --example slide_fade`.

use std::collections::HashMap;

use anyhow::Result;
use tween_scene::{
    AnimationDescriptor, AnimationScheduler, Easing, InstanceConfig, Track, WidgetId, WidgetKind,
    WidgetTree, animate_targets, apply_track,
};

#[derive(Debug, Clone)]
struct DemoWidget {
    kind: WidgetKind,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    opacity: i32,
    rotation: i32,
    zoom: i32,
    image_angle: i32,
    image_zoom: i32,
    image_pivot: (i32, i32),
    style_pivot: (i32, i32),
}

impl DemoWidget {
    fn new(kind: WidgetKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            width: 40,
            height: 40,
            opacity: 0,
            rotation: 0,
            zoom: 256,
            image_angle: 0,
            image_zoom: 256,
            image_pivot: (0, 0),
            style_pivot: (0, 0),
        }
    }
}

/// A flat "tree": every widget shares one 320x240 parent content box.
#[derive(Debug, Default)]
struct DemoTree {
    widgets: HashMap<WidgetId, DemoWidget>,
}

impl WidgetTree for DemoTree {
    fn kind(&self, id: WidgetId) -> WidgetKind {
        self.widgets[&id].kind
    }

    fn refresh_layout(&mut self, _id: WidgetId) {}

    fn x(&self, id: WidgetId) -> i32 {
        self.widgets[&id].x
    }

    fn y(&self, id: WidgetId) -> i32 {
        self.widgets[&id].y
    }

    fn width(&self, id: WidgetId) -> i32 {
        self.widgets[&id].width
    }

    fn height(&self, id: WidgetId) -> i32 {
        self.widgets[&id].height
    }

    fn opacity(&self, id: WidgetId) -> i32 {
        self.widgets[&id].opacity
    }

    fn rotation(&self, id: WidgetId) -> i32 {
        self.widgets[&id].rotation
    }

    fn zoom(&self, id: WidgetId) -> i32 {
        self.widgets[&id].zoom
    }

    fn pivot(&self, id: WidgetId) -> (i32, i32) {
        self.widgets[&id].image_pivot
    }

    fn parent_content_width(&self, _id: WidgetId) -> i32 {
        320
    }

    fn parent_content_height(&self, _id: WidgetId) -> i32 {
        240
    }

    fn set_x(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().x = value;
    }

    fn set_y(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().y = value;
    }

    fn set_width(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().width = value;
    }

    fn set_height(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().height = value;
    }

    fn set_style_opacity(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().opacity = value;
    }

    fn set_style_rotation(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().rotation = value;
    }

    fn set_style_zoom(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().zoom = value;
    }

    fn set_style_pivot_x(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().style_pivot.0 = value;
    }

    fn set_style_pivot_y(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().style_pivot.1 = value;
    }

    fn set_image_angle(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().image_angle = value;
    }

    fn set_image_zoom(&mut self, id: WidgetId, value: i32) {
        self.widgets.get_mut(&id).unwrap().image_zoom = value;
    }

    fn set_image_pivot(&mut self, id: WidgetId, x: i32, y: i32) {
        self.widgets.get_mut(&id).unwrap().image_pivot = (x, y);
    }
}

struct ToyInstance {
    config: InstanceConfig,
    elapsed: i32,
    done: bool,
}

/// Linear-only scheduler: good enough to watch values move.
#[derive(Default)]
struct ToyScheduler {
    instances: Vec<ToyInstance>,
}

impl AnimationScheduler for ToyScheduler {
    type Handle = usize;

    fn start(&mut self, instance: InstanceConfig) -> usize {
        self.instances.push(ToyInstance {
            config: instance,
            elapsed: 0,
            done: false,
        });
        self.instances.len() - 1
    }
}

impl ToyScheduler {
    fn tick(&mut self, tree: &mut DemoTree, delta_ms: i32) {
        for instance in &mut self.instances {
            if instance.done {
                continue;
            }
            instance.elapsed += delta_ms;
            let active = instance.elapsed - instance.config.delay;
            if active < 0 {
                continue;
            }

            let (track, (from, to)) = match (instance.config.track, instance.config.values) {
                (Some(track), Some(values)) => (track, values),
                _ => continue,
            };

            let duration = instance.config.duration.max(1);
            let clamped = active.min(duration);
            let value = from + (to - from) * clamped / duration;
            apply_track(tree, instance.config.target, track, value);

            if active >= duration {
                instance.done = true;
                if let Some(callback) = &instance.config.on_complete {
                    callback.call(instance.config.user_data.as_ref());
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let mut tree = DemoTree::default();
    let panel = WidgetId(1);
    let icon = WidgetId(2);
    tree.widgets
        .insert(panel, DemoWidget::new(WidgetKind::Plain, 0, 100));
    tree.widgets
        .insert(icon, DemoWidget::new(WidgetKind::Image, 0, 160));

    let mut sched = ToyScheduler::default();

    let descriptor: AnimationDescriptor = serde_json::from_str(
        r#"{ "duration": "200", "x": "50%", "opacity": "255", "easing": "out_sine" }"#,
    )?;
    animate_targets(&mut tree, &mut sched, &[panel, icon], descriptor);

    // Give the icon an extra spin around its center.
    animate_targets(
        &mut tree,
        &mut sched,
        &[icon],
        AnimationDescriptor::new("200")
            .with_rotate("3600")
            .with_pivot("50%", "50%")
            .with_easing(Easing::InOutSine),
    );

    for frame in 0..11 {
        sched.tick(&mut tree, 20);
        let p = &tree.widgets[&panel];
        let i = &tree.widgets[&icon];
        println!(
            "t={:4}ms  panel x={:3} opa={:3}  icon x={:3} opa={:3} angle={:4}",
            (frame + 1) * 20,
            p.x,
            p.opacity,
            i.x,
            i.opacity,
            i.image_angle,
        );
    }

    Ok(())
}
