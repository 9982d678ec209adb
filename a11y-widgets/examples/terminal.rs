use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use a11y_widgets::prelude::*;

/// Renders every widget as plain text lines.
#[derive(Default)]
struct TextAdapter {
    views: HashMap<WidgetId, Vec<String>>,
    announcement: Option<String>,
}

impl TextAdapter {
    fn tree_lines(items: &[Item], depth: usize, out: &mut Vec<String>) {
        for item in items {
            let marker = match (item.has_children(), item.is_expanded()) {
                (false, _) => " ",
                (true, true) => "v",
                (true, false) => ">",
            };
            let cursor = if item.is_focusable() { "*" } else { " " };
            let selected = if item.is_selected() { " (selected)" } else { "" };
            out.push(format!(
                "{}{} {} {}{}",
                cursor,
                "  ".repeat(depth),
                marker,
                item.label(),
                selected
            ));
            if item.is_expanded() {
                Self::tree_lines(item.children(), depth + 1, out);
            }
        }
    }

    fn slider_line(state: &WidgetState) -> String {
        let Some(slider) = state.slider() else {
            return String::new();
        };
        let width = 40;
        let filled = (slider.percent() as usize * width) / 100;
        format!(
            "[{}{}] {}",
            "=".repeat(filled),
            " ".repeat(width - filled),
            slider.value()
        )
    }
}

impl Adapter for TextAdapter {
    fn render(&mut self, id: WidgetId, state: &WidgetState) {
        let mut lines = Vec::new();
        match state.kind() {
            WidgetKind::TreeMenu => Self::tree_lines(state.items(), 0, &mut lines),
            WidgetKind::Slider => lines.push(Self::slider_line(state)),
            _ => {}
        }
        self.views.insert(id, lines);
    }

    fn announce(&mut self, id: WidgetId, text: &str, politeness: Politeness) {
        log::info!("{} announces {:?} ({:?})", id, text, politeness);
        self.announcement = Some(text.to_string());
    }
}

fn draw(
    stdout: &mut io::Stdout,
    host: &Host<TextAdapter>,
    widgets: &[WidgetId],
    active: usize,
) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Accessible widgets demo"),
        SetAttribute(Attribute::Reset),
    )?;
    let mut row = 1;
    let mut line = |stdout: &mut io::Stdout, text: &str| -> io::Result<()> {
        row += 1;
        queue!(stdout, cursor::MoveTo(0, row), Print(text))
    };
    line(stdout, "Tab switches widgets, q quits")?;

    for (i, id) in widgets.iter().enumerate() {
        line(stdout, "")?;
        let title = if i == active {
            format!("> {}", id)
        } else {
            format!("  {}", id)
        };
        line(stdout, &title)?;
        if let Some(state) = host.state(*id)
            && let Some(instructions) = state.config().instructions()
        {
            line(stdout, instructions)?;
        }
        for text in host.adapter().views.get(id).into_iter().flatten() {
            line(stdout, text)?;
        }
    }

    line(stdout, "")?;
    let announcement = host.adapter().announcement.as_deref().unwrap_or("");
    line(stdout, &format!("Live region: {}", announcement))?;
    stdout.flush()
}

fn main() -> io::Result<()> {
    let log_file = File::create("terminal.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut host = Host::new(TextAdapter::default());
    let tree_source = Source::new(ElementKind::List)
        .item(
            SourceItem::new("Getting started")
                .child(SourceItem::new("Install"))
                .child(SourceItem::new("First steps")),
        )
        .item(
            SourceItem::new("Reference")
                .child(SourceItem::new("Widgets").child(SourceItem::new("Slider")))
                .child(SourceItem::new("Key map")),
        )
        .item(SourceItem::new("FAQ"));
    let tree = host
        .build(TreeMenuConfig::new().expand_all(false), &tree_source)
        .expect("tree menu");
    let slider = host
        .build(
            SliderConfig::new().range(0, 100).step(5).value(50),
            &Source::new(ElementKind::TextInput),
        )
        .expect("slider");

    let widgets = [tree, slider];
    let mut active = 0;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = (|| -> io::Result<()> {
        loop {
            draw(&mut stdout, &host, &widgets, active)?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match Key::try_from(key.code) {
                    Ok(Key::Char('q')) => return Ok(()),
                    Ok(Key::Tab) => active = (active + 1) % widgets.len(),
                    Ok(mapped) => {
                        let modifiers = Modifiers::from(key.modifiers);
                        if let Err(e) =
                            host.dispatch(widgets[active], Input::Key(mapped), modifiers, None)
                        {
                            log::error!("dispatch failed: {}", e);
                        }
                    }
                    Err(code) => log::trace!("ignoring key {:?}", code),
                },
                Event::Resize(_, _) => {
                    for id in widgets {
                        let _ = host.dispatch(id, Input::Resize, Modifiers::NONE, None);
                    }
                }
                _ => {}
            }
        }
    })();

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
