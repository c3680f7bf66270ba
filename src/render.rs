//! Serialisation of the WiX component fragment.

use std::io::Cursor;

use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use thiserror::Error;

/// Namespace of the WiX v4 source schema.
pub const WIX_NAMESPACE: &str = "http://wixtoolset.org/schemas/v4/wxs";
pub const DEFAULT_GROUP_ID: &str = "FrameResizerComponents";
pub const DEFAULT_DIRECTORY_ID: &str = "INSTALLFOLDER";

/// Attributes of the emitted `<ComponentGroup>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroup {
    pub id: String,
    pub directory: String,
}

impl Default for ComponentGroup {
    fn default() -> Self {
        Self {
            id: DEFAULT_GROUP_ID.to_owned(),
            directory: DEFAULT_DIRECTORY_ID.to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error while writing XML: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML serialisation failed: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("rendered XML is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Build the `Source` attribute for `file`: the template literal as given,
/// a backslash, then the file name.
pub fn source_for(source_dir: &str, file: &str) -> String {
    format!("{}\\{}", source_dir, file)
}

/// `<File Source="..." />`, with a space before the slash. The trailing space
/// is part of the tag content, so the writer emits ` />`.
fn file_element(source: &str) -> BytesStart<'static> {
    let content = format!("File Source=\"{}\" ", escape(source));
    BytesStart::from_content(content, "File".len())
}

/// Render the fragment with the default component group attributes.
pub fn render(source_dir: &str, files: &[String]) -> Result<String, RenderError> {
    render_group(&ComponentGroup::default(), source_dir, files)
}

/// Render a `<Wix>` fragment with one `<Component>`/`<File>` pair per entry
/// of `files`, in the order given.
///
/// `source_dir` is written into each `Source` attribute verbatim, so an
/// unresolved `$(Configuration)` stays in the output. Attribute values are
/// XML-escaped and each `<File>` element ends in ` />`. The result has
/// two-space indentation, `\n` line breaks and no trailing newline.
pub fn render_group(
    group: &ComponentGroup,
    source_dir: &str,
    files: &[String],
) -> Result<String, RenderError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    let mut wix = BytesStart::new("Wix");
    wix.push_attribute(("xmlns", WIX_NAMESPACE));
    writer.write_event(Event::Start(wix))?;
    writer.write_event(Event::Start(BytesStart::new("Fragment")))?;

    let mut component_group = BytesStart::new("ComponentGroup");
    component_group.push_attribute(("Id", group.id.as_str()));
    component_group.push_attribute(("Directory", group.directory.as_str()));
    writer.write_event(Event::Start(component_group))?;

    for file in files {
        writer.write_event(Event::Start(BytesStart::new("Component")))?;
        writer.write_event(Event::Empty(file_element(&source_for(source_dir, file))))?;
        writer.write_event(Event::End(BytesEnd::new("Component")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("ComponentGroup")))?;
    writer.write_event(Event::End(BytesEnd::new("Fragment")))?;
    writer.write_event(Event::End(BytesEnd::new("Wix")))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}
