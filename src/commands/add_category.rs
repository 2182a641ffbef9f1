use crate::core::data::Catalog;
use crate::core::traits::Prompter;
use crate::utils::{FlowResult, OutputStyle, prompt_required};
use crate::utils::error::AppResult;

/// Ask for a category name and icon and add it to both documents.
///
/// The duplicate check runs before the icon is asked for, and a duplicate
/// leaves the catalog untouched.
pub fn handle_add_category<P: Prompter + ?Sized>(
    prompter: &mut P,
    catalog: &mut Catalog,
) -> AppResult<FlowResult> {
    OutputStyle::print_section("Add New Category");

    let name = prompt_required(prompter, "Enter Category Name (e.g., 'Converters'): ")?;

    if catalog.contains_category(&name) {
        return Ok(FlowResult::AlreadyExists {
            item_type: "Category".to_string(),
            name,
        });
    }

    let icon = prompt_required(
        prompter,
        &format!("Enter Bootstrap Icon Class for '{}' (e.g., 'bi-gear'): ", name),
    )?;

    if let Err(e) = catalog.add_category(&name, &icon) {
        return Ok(FlowResult::Aborted(e.to_string()));
    }

    tracing::info!(category = %name, icon = %icon, "category added");
    Ok(FlowResult::Success(format!("Category '{}' added pending save.", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompter;

    fn catalog_with(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::default();
        for name in names {
            catalog.add_category(name, "bi-box").unwrap();
        }
        catalog
    }

    #[test]
    fn test_adds_category_with_icon() {
        let mut catalog = catalog_with(&["A", "B"]);
        let mut prompter = ScriptedPrompter::new(["C", "bi-gear"]);

        let flow = handle_add_category(&mut prompter, &mut catalog).unwrap();

        assert!(flow.is_success());
        assert_eq!(catalog.tools().get("C"), Some(&Vec::new()));
        assert_eq!(catalog.icons().get("C").map(String::as_str), Some("bi-gear"));
    }

    #[test]
    fn test_duplicate_stops_before_icon_prompt() {
        let mut catalog = catalog_with(&["Converters"]);
        let before = catalog.clone();
        let mut prompter = ScriptedPrompter::new(["Converters", "bi-unused"]);

        let flow = handle_add_category(&mut prompter, &mut catalog).unwrap();

        assert!(matches!(flow, FlowResult::AlreadyExists { ref name, .. } if name == "Converters"));
        assert_eq!(catalog, before);
        assert_eq!(prompter.prompts().len(), 1);
    }

    #[test]
    fn test_empty_name_and_icon_are_reprompted() {
        let mut catalog = Catalog::default();
        let mut prompter = ScriptedPrompter::new(["", "Converters", "  ", "bi-arrow"]);

        let flow = handle_add_category(&mut prompter, &mut catalog).unwrap();

        assert!(flow.is_success());
        assert_eq!(catalog.icons().get("Converters").map(String::as_str), Some("bi-arrow"));
    }
}
