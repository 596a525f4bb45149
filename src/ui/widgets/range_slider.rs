//! Range slider widget
//!
//! A slider with one thumb per value, used for price filters:
//! - Pointer drag moves a thumb, quantized to the interval step
//! - Thumbs keep their order; a thumb pushed past a neighbour drags it along
//! - Arrow keys nudge the thumb nearest the cursor by one step
//!
//! The value sequence belongs to the caller. Every move publishes a complete
//! new sequence through `on_change`.

mod drag;
mod interval;

pub use drag::{DragState, move_thumb, nearest_thumb, pick_thumb, step_thumb};
pub use interval::{Interval, Track};

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::keyboard;
use iced::keyboard::key::{self, Key};
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Background, Color, Element, Event, Length, Pixels, Rectangle, Size, Theme};

/// Extra pixels around a thumb that still count as a hit
const HIT_SLOP: f32 = 4.0;

/// Multi-thumb range slider
pub struct RangeSlider<'a, Message> {
    interval: Interval,
    values: Vec<f32>,
    on_change: Box<dyn Fn(Vec<f32>) -> Message + 'a>,
    on_release: Option<Message>,
    width: Length,
    height: f32,
    thumb_radius: f32,
    style: Box<dyn Fn(&Theme, Status) -> Style + 'a>,
    status: Option<Status>,
}

impl<'a, Message> RangeSlider<'a, Message>
where
    Message: Clone,
{
    pub const DEFAULT_HEIGHT: f32 = 24.0;
    pub const DEFAULT_THUMB_RADIUS: f32 = 8.0;

    /// Values are clamped, quantized and ordered against `interval`.
    /// An empty sequence renders a bare rail that ignores input.
    pub fn new<F>(interval: Interval, values: &[f32], on_change: F) -> Self
    where
        F: 'a + Fn(Vec<f32>) -> Message,
    {
        Self {
            values: interval.normalize(values),
            interval,
            on_change: Box::new(on_change),
            on_release: None,
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
            thumb_radius: Self::DEFAULT_THUMB_RADIUS,
            style: Box::new(default_style),
            status: None,
        }
    }

    pub fn on_release(mut self, on_release: Message) -> Self {
        self.on_release = Some(on_release);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Pixels>) -> Self {
        self.height = height.into().0;
        self
    }

    /// Thumb radius; also sets the hit area and the rail inset
    pub fn thumb_radius(mut self, radius: f32) -> Self {
        self.thumb_radius = radius.max(1.0);
        self
    }

    pub fn style(mut self, style: impl Fn(&Theme, Status) -> Style + 'a) -> Self {
        self.style = Box::new(style);
        self
    }
}

/// Rail inset by the thumb radius so thumb centres stay inside the widget
pub fn track_for(bounds: Rectangle, thumb_radius: f32) -> Track {
    Track::new(bounds.x + thumb_radius, bounds.width - thumb_radius * 2.0)
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for RangeSlider<'_, Message>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();
        let track = track_for(bounds, self.thumb_radius);

        match &event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerPressed { .. }) => {
                if let Some(cursor_position) = cursor.position_over(bounds) {
                    let hit = pick_thumb(
                        &self.values,
                        &self.interval,
                        track,
                        cursor_position.x,
                        self.thumb_radius + HIT_SLOP,
                    );
                    if let Some(thumb) = hit {
                        if state.drag.begin(thumb) {
                            tracing::debug!("Range slider drag started on thumb {}", thumb);
                        }
                        shell.capture_event();
                    }
                }
            }
            // Released anywhere in the window, not only over the widget
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | Event::Touch(touch::Event::FingerLifted { .. })
            | Event::Touch(touch::Event::FingerLost { .. }) => {
                if let Some(thumb) = state.drag.end() {
                    tracing::debug!("Range slider drag ended on thumb {}", thumb);
                    if let Some(on_release) = self.on_release.clone() {
                        shell.publish(on_release);
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Touch(touch::Event::FingerMoved { .. }) => {
                if let Some(thumb) = state.drag.active() {
                    if let Some(pos) = cursor.land().position() {
                        let new_value = self.interval.locate(pos.x, track);
                        let next = move_thumb(&self.values, thumb, new_value);
                        shell.publish((self.on_change)(next.clone()));
                        self.values = next;
                    }
                    shell.capture_event();
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                if let Some(cursor_position) = cursor.position_over(bounds) {
                    let steps = match key {
                        Key::Named(key::Named::ArrowUp) | Key::Named(key::Named::ArrowRight) => 1,
                        Key::Named(key::Named::ArrowDown) | Key::Named(key::Named::ArrowLeft) => -1,
                        _ => 0,
                    };
                    if steps != 0 {
                        if let Some((thumb, _)) =
                            nearest_thumb(&self.values, &self.interval, track, cursor_position.x)
                        {
                            let next = step_thumb(&self.values, &self.interval, thumb, steps);
                            if next != self.values {
                                shell.publish((self.on_change)(next.clone()));
                                self.values = next;
                            }
                            shell.capture_event();
                        }
                    }
                }
            }
            _ => {}
        }

        let current_status = if state.drag.is_dragging() {
            Status::Dragged
        } else if cursor.is_over(bounds) {
            Status::Hovered
        } else {
            Status::Active
        };

        if let Event::Window(window::Event::RedrawRequested(_now)) = event {
            self.status = Some(current_status);
        } else if self.status.is_some_and(|status| status != current_status) {
            shell.request_redraw();
        }
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let style = (self.style)(theme, self.status.unwrap_or(Status::Active));
        let track = track_for(bounds, self.thumb_radius);
        let rail_y = bounds.y + bounds.height / 2.0;

        // Full rail
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: track.left,
                    y: rail_y - style.rail.width / 2.0,
                    width: track.width,
                    height: style.rail.width,
                },
                border: style.rail.border,
                ..renderer::Quad::default()
            },
            style.rail.backgrounds.1,
        );

        let centres: Vec<f32> = self
            .values
            .iter()
            .map(|&value| self.interval.position(value, track))
            .collect();

        // Selected span: between the outer thumbs, or from the start for a single thumb
        let span = match centres.as_slice() {
            [] => None,
            [only] => Some((track.left, *only)),
            [first, .., last] => Some((*first, *last)),
        };
        if let Some((start, end)) = span {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: start,
                        y: rail_y - style.rail.width / 2.0,
                        width: (end - start).max(0.0),
                        height: style.rail.width,
                    },
                    border: style.rail.border,
                    ..renderer::Quad::default()
                },
                style.rail.backgrounds.0,
            );
        }

        let radius = self.thumb_radius;
        for centre in centres {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: centre - radius,
                        y: rail_y - radius,
                        width: radius * 2.0,
                        height: radius * 2.0,
                    },
                    border: Border {
                        radius: radius.into(),
                        width: style.handle.border_width,
                        color: style.handle.border_color,
                    },
                    ..renderer::Quad::default()
                },
                style.handle.background,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.drag.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<RangeSlider<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(slider: RangeSlider<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(slider)
    }
}

/// Per-instance widget state; dropping it with the widget ends any drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct State {
    drag: DragState,
}

/// Status of the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
}

/// Style for the range slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub rail: Rail,
    pub handle: Handle,
}

/// Rail appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rail {
    /// (selected span, rest of the rail)
    pub backgrounds: (Background, Background),
    pub width: f32,
    pub border: Border,
}

/// Thumb appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub background: Background,
    pub border_width: f32,
    pub border_color: Color,
}

fn default_style(_theme: &Theme, status: Status) -> Style {
    let accent = crate::ui::theme::ACCENT;
    Style {
        rail: Rail {
            backgrounds: (
                Background::Color(accent),
                Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.15)),
            ),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
        handle: Handle {
            background: Background::Color(Color::WHITE),
            border_width: if status == Status::Dragged { 3.0 } else { 2.0 },
            border_color: accent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_is_inset_by_thumb_radius() {
        let bounds = Rectangle {
            x: 10.0,
            y: 0.0,
            width: 300.0,
            height: 24.0,
        };
        assert_eq!(track_for(bounds, 8.0), Track::new(18.0, 284.0));
    }

    #[test]
    fn track_never_has_negative_width() {
        let bounds = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 24.0,
        };
        assert_eq!(track_for(bounds, 8.0).width, 0.0);
    }

    #[test]
    fn constructor_normalizes_values() {
        let interval = Interval::new(0.0, 200_000.0, 5_000.0).unwrap();
        let slider: RangeSlider<'_, Vec<f32>> =
            RangeSlider::new(interval, &[180_000.0, 20_000.0, 999_999.0], |v| v);
        assert_eq!(slider.values, vec![180_000.0, 180_000.0, 200_000.0]);
    }

    #[test]
    fn on_change_receives_full_sequence() {
        let interval = Interval::new(0.0, 100.0, 1.0).unwrap();
        let slider: RangeSlider<'_, Vec<f32>> = RangeSlider::new(interval, &[10.0, 90.0], |v| v);
        let next = move_thumb(&slider.values, 1, 40.0);
        assert_eq!((slider.on_change)(next), vec![10.0, 40.0]);
    }

    mod event_path {
        use super::*;
        use iced::Point;
        use iced::advanced::clipboard;

        const WIDTH: f32 = 616.0;
        const HEIGHT: f32 = 24.0;

        /// Slider over [0, 200000] step 5000 with a 600px track starting at x=8
        struct Harness {
            slider: RangeSlider<'static, Vec<f32>>,
            tree: Tree,
            node: layout::Node,
            messages: Vec<Vec<f32>>,
        }

        impl Harness {
            fn new(values: &[f32]) -> Self {
                let interval = Interval::new(0.0, 200_000.0, 5_000.0).unwrap();
                Self {
                    slider: RangeSlider::new(interval, values, |v| v).on_release(Vec::new()),
                    tree: Tree {
                        tag: tree::Tag::of::<State>(),
                        state: tree::State::new(State::default()),
                        children: Vec::new(),
                    },
                    node: layout::Node::new(Size::new(WIDTH, HEIGHT)),
                    messages: Vec::new(),
                }
            }

            /// Returns whether the slider captured the event
            fn send(&mut self, event: Event, x: f32, y: f32) -> bool {
                let mut shell = Shell::new(&mut self.messages);
                Widget::<Vec<f32>, Theme, ()>::update(
                    &mut self.slider,
                    &mut self.tree,
                    &event,
                    Layout::new(&self.node),
                    mouse::Cursor::Available(Point::new(x, y)),
                    &(),
                    &mut clipboard::Null,
                    &mut shell,
                    &Rectangle::with_size(Size::new(WIDTH, HEIGHT)),
                );
                shell.is_event_captured()
            }

            fn press(&mut self, x: f32, y: f32) -> bool {
                self.send(
                    Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                    x,
                    y,
                )
            }

            fn move_to(&mut self, x: f32, y: f32) -> bool {
                self.send(
                    Event::Mouse(mouse::Event::CursorMoved {
                        position: Point::new(x, y),
                    }),
                    x,
                    y,
                )
            }

            fn release(&mut self, x: f32, y: f32) -> bool {
                self.send(
                    Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
                    x,
                    y,
                )
            }

            fn key(&mut self, named: key::Named, x: f32, y: f32) -> bool {
                self.send(
                    Event::Keyboard(keyboard::Event::KeyPressed {
                        key: Key::Named(named),
                        modified_key: Key::Named(named),
                        physical_key: key::Physical::Unidentified(key::NativeCode::Unidentified),
                        location: keyboard::Location::Standard,
                        modifiers: keyboard::Modifiers::default(),
                        text: None,
                        repeat: false,
                    }),
                    x,
                    y,
                )
            }

            fn dragging(&self) -> bool {
                self.tree.state.downcast_ref::<State>().drag.is_dragging()
            }
        }

        #[test]
        fn drag_follows_pointer_outside_bounds_and_ends_on_outside_release() {
            let mut h = Harness::new(&[0.0, 200_000.0]);

            assert!(h.press(8.0, 12.0));
            assert!(h.dragging());

            assert!(h.move_to(228.0, 500.0));
            assert!(h.move_to(-400.0, 500.0));
            assert!(h.move_to(9_000.0, 500.0));
            assert!(h.dragging());

            h.release(9_000.0, 900.0);
            assert!(!h.dragging());
            assert_eq!(
                h.messages,
                vec![
                    vec![75_000.0, 200_000.0],
                    vec![0.0, 200_000.0],
                    vec![200_000.0, 200_000.0],
                    Vec::new(),
                ]
            );
        }

        #[test]
        fn one_change_per_cursor_move() {
            let mut h = Harness::new(&[0.0, 200_000.0]);
            h.press(608.0, 12.0);

            for (i, x) in [500.0, 400.0, 300.0, 300.0].into_iter().enumerate() {
                h.move_to(x, 12.0);
                assert_eq!(h.messages.len(), i + 1);
            }
            assert!(h.messages.iter().all(|values| values[0] <= values[1]));
        }

        #[test]
        fn press_off_every_thumb_does_not_start_a_drag() {
            let mut h = Harness::new(&[0.0, 200_000.0]);

            assert!(!h.press(308.0, 12.0));
            assert!(!h.dragging());
            assert!(!h.move_to(400.0, 12.0));
            h.release(400.0, 12.0);
            assert!(h.messages.is_empty());
        }

        #[test]
        fn press_outside_bounds_is_ignored() {
            let mut h = Harness::new(&[0.0, 200_000.0]);
            assert!(!h.press(8.0, 200.0));
            assert!(!h.dragging());
        }

        #[test]
        fn arrow_keys_step_nearest_thumb() {
            let mut h = Harness::new(&[0.0, 200_000.0]);

            assert!(h.key(key::Named::ArrowLeft, 600.0, 12.0));
            assert!(h.key(key::Named::ArrowRight, 20.0, 12.0));
            assert_eq!(
                h.messages,
                vec![vec![0.0, 195_000.0], vec![5_000.0, 195_000.0]]
            );
        }

        #[test]
        fn arrow_keys_ignored_without_hover_or_at_bound() {
            let mut h = Harness::new(&[0.0, 200_000.0]);

            assert!(!h.key(key::Named::ArrowLeft, 600.0, 200.0));
            // Thumb 0 already sits on min
            h.key(key::Named::ArrowLeft, 10.0, 12.0);
            assert!(h.messages.is_empty());
        }
    }
}
