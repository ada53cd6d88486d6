use crate::error::Result;
use crate::menu::{Menu, OptionSpec, Param, ParamKind, CLEAR_SCREEN};
use anyhow::Context;
use std::io::{self, Write};

/// Default size for the shape options.
pub const DEFAULT_SIZE: i64 = 5;

/// Largest size the shape options draw; bigger requests are capped.
pub const MAX_SIZE: usize = 200;

/// Registers the demo options on `menu`.
pub fn register_demo(menu: &mut Menu) -> Result<()> {
    menu.option(
        OptionSpec::new("greet").names(["hello", "hi"]).help("Say hello"),
        |_| {
            println!("Hello!");
            Ok(())
        },
    )?;

    menu.option(
        OptionSpec::new("add_numbers").name("add").help("Add two numbers"),
        |_| {
            let a = read_number("First number: ")?;
            let b = read_number("Second number: ")?;
            println!("Result: {}", a.checked_add(b).context("sum does not fit in 64 bits")?);
            Ok(())
        },
    )?;

    menu.option(OptionSpec::new("Triangle").param(size_param("size")), |args| {
        print_lines(&triangle(args.int("size")?))
    })?;

    menu.option(OptionSpec::new("Square").param(size_param("size")), |args| {
        print_lines(&square(args.int("size")?))
    })?;

    menu.option(OptionSpec::new("Circle").param(size_param("radius")), |args| {
        print_lines(&circle(args.int("radius")?))
    })?;

    menu.option(
        OptionSpec::new("clear").name("cls").doc("Clear the screen"),
        |_| {
            let mut stdout = io::stdout();
            write!(stdout, "{}", CLEAR_SCREEN)?;
            stdout.flush()?;
            Ok(())
        },
    )?;

    Ok(())
}

fn size_param(name: &str) -> Param {
    Param::new(name).typed(ParamKind::Int).with_default(DEFAULT_SIZE)
}

fn print_lines(lines: &[String]) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

/// Reads one integer from standard input, the way an action would ask for its own data.
fn read_number(prompt: &str) -> anyhow::Result<i64> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        anyhow::bail!("no input for {:?}", prompt.trim_end_matches([':', ' ']));
    }
    let raw = line.trim();
    raw.parse::<i64>()
        .with_context(|| format!("invalid number: {:?}", raw))
}

/// Negative sizes draw nothing.
fn clamp(size: i64) -> usize {
    usize::try_from(size).unwrap_or(0).min(MAX_SIZE)
}

/// Right triangle of stars, one more per row.
pub fn triangle(size: i64) -> Vec<String> {
    (1..=clamp(size))
        .map(|i| "* ".repeat(i).trim_end().to_string())
        .collect()
}

/// Hollow square of stars.
pub fn square(size: i64) -> Vec<String> {
    let size = clamp(size);
    (0..size)
        .map(|i| {
            if i == 0 || i == size - 1 {
                " * ".repeat(size)
            } else {
                format!(" * {} * ", "   ".repeat(size.saturating_sub(2)))
            }
        })
        .collect()
}

/// Circle outline of stars on a (2r+1)×(2r+1) grid.
pub fn circle(radius: i64) -> Vec<String> {
    if radius < 0 {
        return Vec::new();
    }
    let r = clamp(radius) as i64;
    let rf = r as f64;
    (-r..=r)
        .map(|i| {
            let row: String = (-r..=r)
                .map(|j| {
                    let dist = ((i * i + j * j) as f64).sqrt();
                    if rf - 0.5 <= dist && dist <= rf + 0.5 {
                        "* "
                    } else {
                        "  "
                    }
                })
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{MenuConfig, Resolution};

    #[test]
    fn test_triangle_rows_grow() {
        assert_eq!(triangle(3), ["*", "* *", "* * *"]);
        assert!(triangle(0).is_empty());
        assert!(triangle(-2).is_empty());
    }

    #[test]
    fn test_square_is_hollow() {
        assert_eq!(square(3), [" *  *  * ", " *     * ", " *  *  * "]);
        assert_eq!(square(1), [" * "]);
    }

    #[test]
    fn test_circle_is_symmetric() {
        let rows = circle(DEFAULT_SIZE);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows.first(), rows.last());
        // Widest row passes through the centre.
        assert!(rows[5].starts_with('*'));
        assert_eq!(circle(0), ["*"]);
    }

    #[test]
    fn test_negative_sizes_draw_nothing() {
        assert!(circle(-3).is_empty());
        assert!(square(-1).is_empty());
    }

    #[test]
    fn test_huge_sizes_are_capped() {
        assert_eq!(triangle(i64::MAX).len(), MAX_SIZE);
        assert_eq!(circle(i64::MAX).len(), 2 * MAX_SIZE + 1);
    }

    #[test]
    fn test_demo_registration_order_and_names() {
        let mut menu = Menu::new(MenuConfig::default());
        register_demo(&mut menu).unwrap();
        let primaries: Vec<&str> = menu
            .registry()
            .all_options()
            .iter()
            .map(|o| o.primary())
            .collect();
        assert_eq!(
            primaries,
            ["quit", "hello", "add", "Triangle", "Square", "Circle", "cls"]
        );
        assert_eq!(menu.registry().lookup_by_name("cls").unwrap().help(), "Clear the screen");
    }

    #[test]
    fn test_demo_prefixes() {
        let mut menu = Menu::new(MenuConfig::default());
        register_demo(&mut menu).unwrap();
        assert!(matches!(menu.resolve("c"), Resolution::Ambiguous(ref n) if n == &["Circle", "cls"]));
        assert_eq!(menu.resolve("ci").option().unwrap().primary(), "Circle");
        assert_eq!(menu.resolve("tri").option().unwrap().primary(), "Triangle");
    }
}
