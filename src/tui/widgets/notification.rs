//! Toast notification widget
//!
//! Displays temporary notifications stacked in the top-right corner.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Maximum number of toasts drawn at once
pub const MAX_VISIBLE: usize = 3;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    /// Border and title colour
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    /// Title shown in the toast border
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "i Info",
            Self::Success => "+ Success",
            Self::Warning => "! Warning",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Whether the toast has outlived its duration as of `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Widget for rendering a single toast
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Pending toasts, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop toasts that have expired
    pub fn remove_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// The most recent toasts, at most [`MAX_VISIBLE`], newest last
    pub fn visible(&self) -> &[Notification] {
        let start = self.notifications.len().saturating_sub(MAX_VISIBLE);
        &self.notifications[start..]
    }
}

/// Area for the `slot`-th stacked toast in the top-right corner of `parent`
pub fn toast_area(parent: Rect, slot: usize) -> Option<Rect> {
    const HEIGHT: u16 = 4;
    let width = parent.width.min(50);
    let offset = HEIGHT.checked_mul(u16::try_from(slot).ok()?)?;
    let y = parent.y.checked_add(1)?.checked_add(offset)?;
    if y + HEIGHT > parent.y + parent.height {
        return None;
    }
    let x = parent.x + parent.width.saturating_sub(width + 1);
    Some(Rect::new(x, y, width, HEIGHT))
}
