use crate::core::data::{Catalog, Tool};
use crate::core::derive::{Derived, derive_banner, derive_url, resolve_banner, resolve_url};
use crate::core::traits::Prompter;
use crate::utils::error::AppResult;
use crate::utils::{
    FlowResult, OutputStyle, print_warning, prompt_optional, prompt_required, prompt_selection,
};

fn optional_prompt(label: &str, derived: &Derived) -> String {
    match derived {
        Derived::Usable(value) => format!("{} [Press Enter for '{}']: ", label, value),
        Derived::Unusable(_) => format!("{}: ", label),
    }
}

/// Pick a category, collect the tool fields, and append the tool.
///
/// An empty URL with no usable default aborts without touching the
/// catalog; an empty banner with no usable default falls back to
/// `default_banner`.
pub fn handle_add_tool<P: Prompter + ?Sized>(
    prompter: &mut P,
    catalog: &mut Catalog,
    default_banner: &str,
) -> AppResult<FlowResult> {
    OutputStyle::print_section("Add New Tool");

    let categories = catalog.categories();
    if categories.is_empty() {
        return Ok(FlowResult::EmptyList {
            item_type: "categories".to_string(),
            hint: "Please add a category first.".to_string(),
        });
    }

    println!("Available Categories:");
    for (idx, name) in categories.iter().enumerate() {
        let tool_count = catalog.tools().get(name).map_or(0, Vec::len);
        let icon = catalog.icons().get(name).map(String::as_str);
        OutputStyle::print_category_choice(idx + 1, name, icon, tool_count);
    }

    let position = prompt_selection(prompter, "Select Category Number: ", categories.len())?;
    let category = &categories[position - 1];
    println!(
        "\nAdding tool to category: '{}'",
        OutputStyle::category(category)
    );

    let name = prompt_required(prompter, "Tool Name: ")?;
    let description = prompt_required(prompter, "Description: ")?;

    let derived_url = derive_url(category, &name);
    if let Derived::Unusable(reason) = &derived_url {
        tracing::debug!(%reason, "no default URL");
        print_warning(&format!("No default URL available: {}.", reason));
    }
    let url_input = prompt_optional(prompter, &optional_prompt("URL (relative path)", &derived_url))?;
    let Some(url) = resolve_url(&url_input, &derived_url) else {
        let reason = match &derived_url {
            Derived::Unusable(reason) => reason.as_str(),
            Derived::Usable(_) => "no default",
        };
        return Ok(FlowResult::Aborted(format!(
            "URL cannot be empty if auto-guess failed ({}).",
            reason
        )));
    };

    let derived_banner = derive_banner(category, &url);
    if let Derived::Unusable(reason) = &derived_banner {
        tracing::debug!(%reason, "no default banner");
    }
    let banner_input = prompt_optional(prompter, &optional_prompt("Banner Path", &derived_banner))?;
    let banner = resolve_banner(&banner_input, &derived_banner, default_banner);

    let tool = match Tool::new(name.as_str(), description, url, banner) {
        Ok(tool) => tool,
        Err(e) => return Ok(FlowResult::Aborted(e.to_string())),
    };

    tracing::info!(category = %category, tool = %tool, "tool added");
    if let Err(e) = catalog.add_tool(category, tool) {
        return Ok(FlowResult::Aborted(e.to_string()));
    }

    Ok(FlowResult::Success(format!("Tool '{}' added pending save.", name)))
}
