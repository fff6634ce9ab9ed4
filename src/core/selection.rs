// View state for the scan-file picker: label text plus submit availability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionView {
    pub label: String,
    pub submit_enabled: bool,
}

/// Derive what the picker should show for the current selection. A missing
/// or empty file name blanks the label and disables the submit control.
pub fn view_for(name: Option<&str>) -> SelectionView {
    match name {
        Some(n) if !n.is_empty() => SelectionView {
            label: n.to_string(),
            submit_enabled: true,
        },
        _ => SelectionView {
            label: String::new(),
            submit_enabled: false,
        },
    }
}
