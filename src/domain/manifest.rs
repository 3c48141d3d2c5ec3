use serde::Serialize;

use crate::elements::{
    color_of, name_of, state_of, ElementId, ElementState, ELEMENT_COUNT, EL_EMPTY, TOOL_COOL, TOOL_HEAT,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ElementManifest<'a> {
    format_version: u32,
    elements: Vec<ManifestElement<'a>>,
    tools: Vec<ManifestTool<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestElement<'a> {
    id: ElementId,
    name: &'a str,
    color: u32,
    state: ElementState,
    hidden: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestTool<'a> {
    id: ElementId,
    name: &'a str,
    color: u32,
}

/// Registry description for the UI layer (palette buttons, inspector names)
pub fn manifest_json() -> Result<String, serde_json::Error> {
    let out = ElementManifest {
        format_version: 1,
        elements: (0..ELEMENT_COUNT as ElementId)
            .map(|id| ManifestElement {
                id,
                name: name_of(id),
                color: color_of(id),
                state: state_of(id),
                hidden: id == EL_EMPTY,
            })
            .collect(),
        tools: [TOOL_HEAT, TOOL_COOL]
            .into_iter()
            .map(|id| ManifestTool {
                id,
                name: name_of(id),
                color: color_of(id),
            })
            .collect(),
    };
    serde_json::to_string(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ELEMENT_COUNT, TOOL_HEAT};

    #[test]
    fn manifest_lists_every_element_and_tool() {
        let json = manifest_json().expect("manifest serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["formatVersion"], 1);
        let elements = value["elements"].as_array().expect("elements array");
        assert_eq!(elements.len(), ELEMENT_COUNT);
        assert_eq!(elements[0]["hidden"], true);
        assert_eq!(elements[3]["name"], "WATER");
        assert_eq!(elements[3]["state"], "liquid");

        let tools = value["tools"].as_array().expect("tools array");
        assert_eq!(tools[0]["id"], TOOL_HEAT);
    }
}
