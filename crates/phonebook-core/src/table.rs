use crate::directory::Directory;

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const HEADER_LEFT: char = '|';
const DOUBLE_VERTICAL: char = '║';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLabels {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            name: "Имя".to_string(),
            phone: "Телефон".to_string(),
            email: "email".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    name: usize,
    phone: usize,
    email: usize,
}

impl ColumnWidths {
    /// Widest stored value per column. Labels do not widen a column.
    fn measure(directory: &Directory) -> Self {
        directory.contacts().fold(
            Self {
                name: 0,
                phone: 0,
                email: 0,
            },
            |widths, contact| Self {
                name: widths.name.max(display_len(&contact.name)),
                phone: widths.phone.max(display_len(&contact.phone)),
                email: widths.email.max(display_len(&contact.email)),
            },
        )
    }

    fn border(&self, left: char, first: char, second: char, right: char) -> String {
        let mut line = String::new();
        line.push(left);
        push_repeated(&mut line, HORIZONTAL, self.name);
        line.push(first);
        push_repeated(&mut line, HORIZONTAL, self.phone);
        line.push(second);
        push_repeated(&mut line, HORIZONTAL, self.email);
        line.push(right);
        line
    }

    fn row(&self, left: char, name: &str, phone: &str, email: &str) -> String {
        let mut line = String::new();
        line.push(left);
        push_padded(&mut line, name, self.name);
        line.push(VERTICAL);
        push_padded(&mut line, phone, self.phone);
        line.push(DOUBLE_VERTICAL);
        push_padded(&mut line, email, self.email);
        line.push(VERTICAL);
        line
    }
}

/// Renders every record as a box-drawn table, one string per output line:
/// top border, header, separator, data rows, bottom border. The header's
/// left edge is a plain `|`.
pub fn render_table(directory: &Directory, labels: &TableLabels) -> Vec<String> {
    let widths = ColumnWidths::measure(directory);
    let mut lines = Vec::with_capacity(directory.len() + 4);
    lines.push(widths.border('┌', '┬', '╥', '┐'));
    lines.push(widths.row(HEADER_LEFT, &labels.name, &labels.phone, &labels.email));
    lines.push(widths.border('├', '┼', '╫', '┤'));
    for contact in directory.contacts() {
        lines.push(widths.row(VERTICAL, &contact.name, &contact.phone, &contact.email));
    }
    lines.push(widths.border('└', '┴', '╨', '┘'));
    lines
}

/// Width in UTF-16 code units, so a character outside the BMP counts as two.
fn display_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn push_repeated(line: &mut String, ch: char, count: usize) {
    line.extend(std::iter::repeat(ch).take(count));
}

fn push_padded(line: &mut String, value: &str, width: usize) {
    line.push_str(value);
    push_repeated(line, ' ', width.saturating_sub(display_len(value)));
}

#[cfg(test)]
mod tests {
    use super::{render_table, TableLabels};
    use crate::directory::Directory;

    #[test]
    fn empty_directory_renders_zero_width_columns() {
        let directory = Directory::new();
        let lines = render_table(&directory, &TableLabels::default());
        assert_eq!(
            lines,
            vec!["┌┬╥┐", "|Имя│Телефон║email│", "├┼╫┤", "└┴╨┘"]
        );
    }

    #[test]
    fn rows_are_padded_to_widest_value() {
        let mut directory = Directory::new();
        directory.add("Ann", "+1 (212) 555-1234", "ann@example.com");
        directory.add("Bartholomew", "555-123-4567", "b@x.io");

        let lines = render_table(&directory, &TableLabels::default());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "┌───────────┬─────────────────╥───────────────┐");
        assert_eq!(lines[1], "|Имя        │Телефон          ║email          │");
        assert_eq!(lines[2], "├───────────┼─────────────────╫───────────────┤");
        assert_eq!(lines[3], "│Ann        │+1 (212) 555-1234║ann@example.com│");
        assert_eq!(lines[4], "│Bartholomew│555-123-4567     ║b@x.io         │");
        assert_eq!(lines[5], "└───────────┴─────────────────╨───────────────┘");
    }

    #[test]
    fn long_labels_do_not_underflow_padding() {
        let mut directory = Directory::new();
        directory.add("A", "5551234567", "a@x.io");
        let lines = render_table(&directory, &TableLabels::default());
        assert_eq!(lines[1], "|Имя│Телефон   ║email │");
        assert_eq!(lines[3], "│A│5551234567║a@x.io│");
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let mut directory = Directory::new();
        directory.add("Ёж", "5551234567", "ez@x.io");
        directory.add("Al", "5551234567", "al@x.io");
        let lines = render_table(&directory, &TableLabels::default());
        assert_eq!(lines[0], "┌──┬──────────╥───────┐");
        assert!(lines.contains(&"│Ёж│5551234567║ez@x.io│".to_string()));
    }

    #[test]
    fn widths_count_utf16_units() {
        let mut directory = Directory::new();
        directory.add("😀", "5551234567", "s@x.io");
        directory.add("Abc", "5551234567", "t@x.io");
        let lines = render_table(&directory, &TableLabels::default());
        assert_eq!(lines[0], "┌───┬──────────╥──────┐");
        assert_eq!(lines[3], "│😀 │5551234567║s@x.io│");
        assert_eq!(lines[4], "│Abc│5551234567║t@x.io│");
    }

    #[test]
    fn header_starts_with_ascii_bar() {
        let mut directory = Directory::new();
        directory.add("Bartholomew", "555-123-4567", "bart@x.io");
        let lines = render_table(&directory, &TableLabels::default());
        assert_eq!(lines[1], "|Имя        │Телефон     ║email    │");
        assert_eq!(lines[3], "│Bartholomew│555-123-4567║bart@x.io│");
    }

    #[test]
    fn custom_labels() {
        let labels = TableLabels {
            name: "Name".to_string(),
            phone: "Phone".to_string(),
            email: "Email".to_string(),
        };
        let lines = render_table(&Directory::new(), &labels);
        assert_eq!(lines[1], "|Name│Phone║Email│");
    }
}
