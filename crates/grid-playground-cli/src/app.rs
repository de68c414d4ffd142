use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use grid_playground_config::Config;
use grid_playground_engine::{
    Breakpoint, Cmd, ColumnProp, ContainerType, Layout, RowField, Snapshot,
};

use crate::export::export_markup;

pub const HELP: &str = "\
Commands (indices are 0-based; an omitted value clears the field):
  add-row                       append a row with two columns
  delete-row R                  remove row R
  add-col R                     append a column to row R
  delete-col R C                remove column C of row R
  move R C TO_R TO_C            move a column before TO_C in row TO_R
  select row R | select col R C
  clear                         clear the selection
  row R gx|gy|align|justify [V] set a row property
  col R C width|offset|order BP [V]
                                set a column property at breakpoint BP
  height R C [V]                set a column height, e.g. 120px
  container fixed|fluid         switch the container kind
  viewport W                    show effective widths at W pixels
  show                          print the layout structure
  code                          print the generated markup
  export [PATH]                 write markup to PATH or the configured path
  help                          show this text
  quit                          leave";

/// What the REPL should do after a line is handled
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// One parsed input line
#[derive(Debug, PartialEq)]
enum Action {
    Apply(Cmd),
    Show,
    Code,
    Viewport(u32),
    Export(Option<PathBuf>),
    Help,
    Quit,
}

pub struct App {
    layout: Layout,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            layout: Layout::with_container_type(config.container),
            config,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        let output = match parse_action(line)? {
            None => String::new(),
            Some(Action::Quit) => return Ok(Outcome::Quit),
            Some(Action::Help) => HELP.to_string(),
            Some(Action::Show) => render_structure(&self.layout.snapshot()),
            Some(Action::Code) => self.layout.markup_with(&self.config.markup_options()),
            Some(Action::Viewport(width)) => self.render_viewport(width),
            Some(Action::Export(path)) => {
                let path = path
                    .or_else(|| self.config.export_path.clone())
                    .ok_or_else(|| anyhow!("No export path given and none configured"))?;
                export_markup(&self.layout, &path, &self.config.markup_options())
                    .with_context(|| format!("Failed to export to {}", path.display()))?;
                format!("Wrote {}", path.display())
            }
            Some(Action::Apply(cmd)) => {
                let patch = self.layout.apply(cmd)?;
                log::debug!("patch: {patch:?}");
                render_structure(&self.layout.snapshot())
            }
        };
        Ok(Outcome::Continue(output))
    }

    fn render_viewport(&self, width: u32) -> String {
        let bp = Breakpoint::for_viewport(width);
        let mut out = format!("{width}px is {bp}");
        for (r, row) in self.layout.rows().iter().enumerate() {
            let widths: Vec<String> = row
                .columns()
                .iter()
                .map(|c| match c.effective_width(bp) {
                    Some(w) => w.to_string(),
                    None => "stacked".to_string(),
                })
                .collect();
            let _ = write!(out, "\nrow {r}: {}", widths.join(", "));
        }
        out
    }
}

/// Text preview of a snapshot; `*` marks the selection
pub fn render_structure(snapshot: &Snapshot) -> String {
    let mut out = format!(".{}", snapshot.container_class);
    if snapshot.is_empty() {
        out.push_str("\n  (no rows)");
    }
    for row in &snapshot.rows {
        let mark = if row.active { " *" } else { "" };
        let _ = write!(out, "\n  [{}] {}{mark}", row.index, row.label);
        for col in &row.columns {
            let mark = if col.active { " *" } else { "" };
            let mut caption = col.label.primary.clone();
            if !col.label.secondary.is_empty() {
                caption.push(' ');
                caption.push_str(&col.label.secondary);
            }
            if let Some(height) = &col.height {
                let _ = write!(caption, " (height {height})");
            }
            let _ = write!(out, "\n    [{}] {caption}{mark}", col.index);
        }
    }
    out
}

fn parse_action(line: &str) -> Result<Option<Action>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };

    let action = match name {
        "add-row" => Action::Apply(Cmd::AddRow),
        "delete-row" => Action::Apply(Cmd::DeleteRow {
            row: index(args, 0)?,
        }),
        "add-col" => Action::Apply(Cmd::AddColumn {
            row: index(args, 0)?,
        }),
        "delete-col" => Action::Apply(Cmd::DeleteColumn {
            row: index(args, 0)?,
            col: index(args, 1)?,
        }),
        "move" => Action::Apply(Cmd::MoveColumn {
            from_row: index(args, 0)?,
            from_col: index(args, 1)?,
            to_row: index(args, 2)?,
            to_col: index(args, 3)?,
        }),
        "select" => match args.first().copied() {
            Some("row") => Action::Apply(Cmd::SelectRow {
                row: index(args, 1)?,
            }),
            Some("col" | "column") => Action::Apply(Cmd::SelectColumn {
                row: index(args, 1)?,
                col: index(args, 2)?,
            }),
            _ => bail!("Usage: select row R | select col R C"),
        },
        "clear" => Action::Apply(Cmd::ClearSelection),
        "row" => Action::Apply(Cmd::UpdateRow {
            row: index(args, 0)?,
            field: word(args, 1, "field")?.parse::<RowField>()?,
            value: rest(args, 2),
        }),
        "col" => Action::Apply(Cmd::UpdateColumn {
            row: index(args, 0)?,
            col: index(args, 1)?,
            prop: word(args, 2, "property")?.parse::<ColumnProp>()?,
            breakpoint: word(args, 3, "breakpoint")?.parse::<Breakpoint>()?,
            value: rest(args, 4),
        }),
        "height" => Action::Apply(Cmd::SetHeight {
            row: index(args, 0)?,
            col: index(args, 1)?,
            value: rest(args, 2),
        }),
        "container" => Action::Apply(Cmd::SetContainer {
            container: word(args, 0, "container")?.parse::<ContainerType>()?,
        }),
        "viewport" => Action::Viewport(
            word(args, 0, "width")?
                .trim_end_matches("px")
                .parse()
                .context("Width must be a whole number of pixels")?,
        ),
        "show" => Action::Show,
        "code" => Action::Code,
        "export" => Action::Export(args.first().map(PathBuf::from)),
        "help" | "?" => Action::Help,
        "quit" | "exit" | "q" => Action::Quit,
        other => bail!("Unknown command '{other}', try 'help'"),
    };
    Ok(Some(action))
}

fn word<'a>(args: &[&'a str], at: usize, what: &str) -> Result<&'a str> {
    args.get(at)
        .copied()
        .ok_or_else(|| anyhow!("Missing {what}"))
}

fn index(args: &[&str], at: usize) -> Result<usize> {
    let raw = word(args, at, "index")?;
    raw.parse()
        .with_context(|| format!("'{raw}' is not a valid index"))
}

fn rest(args: &[&str], from: usize) -> String {
    args.get(from..).unwrap_or_default().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn output(app: &mut App, line: &str) -> String {
        match app.handle_line(line).unwrap() {
            Outcome::Continue(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[rstest]
    #[case("add-row", Action::Apply(Cmd::AddRow))]
    #[case("delete-col 1 2", Action::Apply(Cmd::DeleteColumn { row: 1, col: 2 }))]
    #[case("select col 0 1", Action::Apply(Cmd::SelectColumn { row: 0, col: 1 }))]
    #[case("container fluid", Action::Apply(Cmd::SetContainer { container: ContainerType::Fluid }))]
    #[case("viewport 800px", Action::Viewport(800))]
    #[case("export", Action::Export(None))]
    #[case("q", Action::Quit)]
    fn test_parse_action(#[case] line: &str, #[case] expected: Action) {
        assert_eq!(parse_action(line).unwrap(), Some(expected));
    }

    #[test]
    fn test_parse_field_updates() {
        assert_eq!(
            parse_action("col 0 1 width md 6").unwrap(),
            Some(Action::Apply(Cmd::UpdateColumn {
                row: 0,
                col: 1,
                prop: ColumnProp::Width,
                breakpoint: Breakpoint::Md,
                value: "6".to_string(),
            }))
        );
        assert_eq!(
            parse_action("row 0 gx").unwrap(),
            Some(Action::Apply(Cmd::UpdateRow {
                row: 0,
                field: RowField::GutterX,
                value: String::new(),
            }))
        );
    }

    #[rstest]
    #[case("frobnicate")]
    #[case("delete-row")]
    #[case("delete-row x")]
    #[case("select cell 0")]
    #[case("col 0 0 width huge 4")]
    fn test_parse_errors(#[case] line: &str) {
        assert!(parse_action(line).is_err());
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_action("   ").unwrap(), None);
    }

    #[test]
    fn test_edit_session() {
        let mut app = App::new(Config::default());
        output(&mut app, "col 0 0 width xs 4");
        output(&mut app, "col 0 0 width md 6");
        output(&mut app, "select col 0 0");
        let shown = output(&mut app, "height 0 1 5rem");

        assert_eq!(
            shown,
            ".container\n  [0] .row\n    [0] col-4 col-md-6 *\n    [1] (no col class) (height 5rem)"
        );
        assert_eq!(
            output(&mut app, "code"),
            "<div class=\"container\">\n  <div class=\"row\">\n    <div class=\"col-4 col-md-6\">...</div>\n    <div>...</div>\n  </div>\n</div>"
        );
    }

    #[test]
    fn test_layout_errors_surface_and_leave_state() {
        let mut app = App::new(Config::default());
        let err = app.handle_line("delete-row 3").unwrap_err();
        assert!(err.to_string().contains("Row 3 does not exist"), "{err}");
        assert_eq!(app.layout().rows().len(), 1);
    }

    #[test]
    fn test_viewport_reports_effective_widths() {
        let mut app = App::new(Config::default());
        output(&mut app, "col 0 0 width sm 6");
        assert_eq!(
            output(&mut app, "viewport 1000"),
            "1000px is lg\nrow 0: 6, stacked"
        );
    }

    #[test]
    fn test_empty_layout_preview() {
        let mut app = App::new(Config::default());
        assert_eq!(output(&mut app, "delete-row 0"), ".container\n  (no rows)");
    }

    #[test]
    fn test_configured_container_and_markup() {
        let config = Config {
            container: ContainerType::Fluid,
            indent: 4,
            ..Config::default()
        };
        let mut app = App::new(config);
        assert!(output(&mut app, "code").starts_with("<div class=\"container-fluid\">\n    <div"));
    }

    #[test]
    fn test_export_uses_given_or_configured_path() {
        let dir = TempDir::new().unwrap();
        let configured = dir.path().join("default.html");
        let mut app = App::new(Config {
            export_path: Some(configured.clone()),
            ..Config::default()
        });

        output(&mut app, "export");
        assert!(configured.exists());

        let explicit = dir.path().join("other.html");
        output(&mut app, &format!("export {}", explicit.display()));
        assert!(explicit.exists());
    }

    #[test]
    fn test_export_without_path_fails() {
        let mut app = App::new(Config::default());
        assert!(app.handle_line("export").is_err());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Config::default());
        assert_eq!(app.handle_line("quit").unwrap(), Outcome::Quit);
    }
}
