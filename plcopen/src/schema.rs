//! PLCopen XML schema structures
//!
//! These structs map to the PLCopen TC6 XML v2.00 schema, as CODESYS imports
//! it. Only the elements a ladder program needs are implemented.

use serde::Serialize;

pub const TC6_NAMESPACE: &str = "http://www.plcopen.org/xml/tc6_0200";
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

pub const PROJECT_INFORMATION: &str = "http://www.3s-software.com/plcopenxml/projectinformation";
pub const PROJECT_STRUCTURE: &str = "http://www.3s-software.com/plcopenxml/projectstructure";
pub const FBD_ELEMENT_TYPE: &str = "http://www.3s-software.com/plcopenxml/fbdelementtype";

/// The root project element
#[derive(Debug, Serialize)]
#[serde(rename = "project")]
pub struct Project {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,

    #[serde(rename = "fileHeader")]
    pub file_header: FileHeader,

    #[serde(rename = "contentHeader")]
    pub content_header: ContentHeader,

    #[serde(rename = "types")]
    pub types: Types,

    #[serde(rename = "instances")]
    pub instances: Instances,

    #[serde(rename = "addData")]
    pub add_data: AddData,
}

/// File header with metadata about the exporting tool
#[derive(Debug, Serialize)]
pub struct FileHeader {
    #[serde(rename = "@companyName")]
    pub company_name: String,

    #[serde(rename = "@productName")]
    pub product_name: String,

    #[serde(rename = "@productVersion")]
    pub product_version: String,

    #[serde(rename = "@creationDateTime")]
    pub creation_date_time: String,
}

/// Content header with project metadata
#[derive(Debug, Serialize)]
pub struct ContentHeader {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@modificationDateTime")]
    pub modification_date_time: String,

    #[serde(rename = "coordinateInfo")]
    pub coordinate_info: CoordinateInfo,

    #[serde(rename = "addData")]
    pub add_data: AddData,
}

/// Coordinate information for graphical editors
#[derive(Debug, Serialize)]
pub struct CoordinateInfo {
    #[serde(rename = "fbd")]
    pub fbd: Scaling,

    #[serde(rename = "ld")]
    pub ld: Scaling,

    #[serde(rename = "sfc")]
    pub sfc: Scaling,
}

impl Default for CoordinateInfo {
    fn default() -> Self {
        Self {
            fbd: Scaling::unit(),
            ld: Scaling::unit(),
            sfc: Scaling::unit(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Scaling {
    #[serde(rename = "scaling")]
    pub scaling: ScalingValue,
}

impl Scaling {
    fn unit() -> Self {
        Self {
            scaling: ScalingValue { x: 1, y: 1 },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScalingValue {
    #[serde(rename = "@x")]
    pub x: u32,

    #[serde(rename = "@y")]
    pub y: u32,
}

/// Container for types (data types and POUs)
#[derive(Debug, Serialize)]
pub struct Types {
    #[serde(rename = "dataTypes")]
    pub data_types: DataTypes,

    #[serde(rename = "pous")]
    pub pous: Pous,
}

/// Container for data type declarations. Always empty.
#[derive(Debug, Serialize, Default)]
pub struct DataTypes {}

/// Container for POUs
#[derive(Debug, Serialize)]
pub struct Pous {
    #[serde(rename = "pou")]
    pub pou: Vec<Pou>,
}

/// Program Organization Unit
#[derive(Debug, Serialize)]
pub struct Pou {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@pouType")]
    pub pou_type: PouType,

    #[serde(rename = "interface")]
    pub interface: Interface,

    #[serde(rename = "body")]
    pub body: Body,
}

/// POU type enumeration
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PouType {
    Program,
}

/// POU interface (variable declarations)
#[derive(Debug, Serialize)]
pub struct Interface {
    #[serde(rename = "localVars")]
    pub local_vars: VarList,
}

/// List of variables with shared attributes
#[derive(Debug, Serialize)]
pub struct VarList {
    #[serde(rename = "variable")]
    pub variable: Vec<Variable>,
}

/// Variable declaration
#[derive(Debug, Serialize)]
pub struct Variable {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "type")]
    pub var_type: TypeElement,
}

/// Wrapper for type elements in XML
///
/// In PLCopen XML, type information is wrapped in `<type>`. This wrapper
/// uses `$value` to write the inner DataType as the only child.
#[derive(Debug, Serialize)]
pub struct TypeElement {
    #[serde(rename = "$value")]
    pub inner: DataType,
}

/// A data type reference (exactly one variant)
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    #[serde(rename = "BOOL")]
    Bool,
}

/// POU body (implementation)
#[derive(Debug, Serialize)]
pub struct Body {
    #[serde(rename = "LD")]
    pub ld: Ld,
}

/// Ladder diagram body. Elements are written in order, each as its own
/// child element.
#[derive(Debug, Serialize)]
pub struct Ld {
    #[serde(rename = "$value")]
    pub elements: Vec<LdElement>,
}

/// One ladder diagram element.
#[derive(Debug, Serialize)]
pub enum LdElement {
    #[serde(rename = "leftPowerRail")]
    LeftPowerRail(LeftPowerRail),
    #[serde(rename = "rightPowerRail")]
    RightPowerRail(RightPowerRail),
    #[serde(rename = "label")]
    Label(Label),
    #[serde(rename = "jump")]
    Jump(Jump),
    #[serde(rename = "comment")]
    Comment(Comment),
    #[serde(rename = "vendorElement")]
    VendorElement(VendorElement),
    #[serde(rename = "contact")]
    Contact(Contact),
    #[serde(rename = "coil")]
    Coil(Coil),
}

/// Graphical position. Every element sits at the origin; the IDE lays the
/// network out on import.
#[derive(Debug, Serialize, Default, Clone, Copy)]
pub struct Position {
    #[serde(rename = "@x")]
    pub x: i64,

    #[serde(rename = "@y")]
    pub y: i64,
}

#[derive(Debug, Serialize)]
pub struct Connection {
    #[serde(rename = "@refLocalId")]
    pub ref_local_id: u64,
}

/// Input side of an element. Several connections are an OR.
#[derive(Debug, Serialize, Default)]
pub struct ConnectionPointIn {
    #[serde(rename = "connection")]
    pub connection: Vec<Connection>,
}

impl ConnectionPointIn {
    pub fn from_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            connection: ids
                .into_iter()
                .map(|ref_local_id| Connection { ref_local_id })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ConnectionPointOut {
    #[serde(rename = "@formalParameter", skip_serializing_if = "Option::is_none")]
    pub formal_parameter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeftPowerRail {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "connectionPointOut")]
    pub connection_point_out: ConnectionPointOut,
}

#[derive(Debug, Serialize)]
pub struct RightPowerRail {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "connectionPointIn")]
    pub connection_point_in: ConnectionPointIn,
}

#[derive(Debug, Serialize)]
pub struct Label {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "@label")]
    pub label: String,

    #[serde(rename = "position")]
    pub position: Position,
}

#[derive(Debug, Serialize)]
pub struct Jump {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "@label")]
    pub label: String,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "connectionPointIn")]
    pub connection_point_in: ConnectionPointIn,
}

#[derive(Debug, Serialize)]
pub struct Comment {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "content")]
    pub content: FormattedText,
}

/// CODESYS-specific element. Used for the title that heads every network.
#[derive(Debug, Serialize)]
pub struct VendorElement {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "alternativeText")]
    pub alternative_text: FormattedText,

    #[serde(rename = "addData")]
    pub add_data: AddData,
}

/// Storage modifier of contacts and coils
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageModifier {
    None,
    Set,
    Reset,
}

/// Edge modifier of contacts
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeModifier {
    None,
}

#[derive(Debug, Serialize)]
pub struct Contact {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "@negated")]
    pub negated: bool,

    #[serde(rename = "@storage")]
    pub storage: StorageModifier,

    #[serde(rename = "@edge")]
    pub edge: EdgeModifier,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "connectionPointIn")]
    pub connection_point_in: ConnectionPointIn,

    #[serde(rename = "connectionPointOut")]
    pub connection_point_out: ConnectionPointOut,

    #[serde(rename = "variable")]
    pub variable: String,
}

#[derive(Debug, Serialize)]
pub struct Coil {
    #[serde(rename = "@localId")]
    pub local_id: u64,

    #[serde(rename = "@negated")]
    pub negated: bool,

    #[serde(rename = "@storage")]
    pub storage: StorageModifier,

    #[serde(rename = "position")]
    pub position: Position,

    #[serde(rename = "connectionPointIn")]
    pub connection_point_in: ConnectionPointIn,

    #[serde(rename = "connectionPointOut")]
    pub connection_point_out: ConnectionPointOut,

    #[serde(rename = "variable")]
    pub variable: String,
}

/// Formatted text holding an empty XHTML element
#[derive(Debug, Serialize)]
pub struct FormattedText {
    #[serde(rename = "xhtml")]
    pub xhtml: Xhtml,
}

impl Default for FormattedText {
    fn default() -> Self {
        Self {
            xhtml: Xhtml {
                xmlns: XHTML_NAMESPACE,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Xhtml {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
}

/// Container for instances (configurations). Always empty.
#[derive(Debug, Serialize, Default)]
pub struct Instances {
    #[serde(rename = "configurations")]
    pub configurations: Configurations,
}

#[derive(Debug, Serialize, Default)]
pub struct Configurations {}

/// Vendor data blocks
#[derive(Debug, Serialize)]
pub struct AddData {
    #[serde(rename = "data")]
    pub data: Vec<Data>,
}

impl AddData {
    pub fn single(data: Data) -> Self {
        Self { data: vec![data] }
    }
}

#[derive(Debug, Serialize)]
pub struct Data {
    #[serde(rename = "@name")]
    pub name: &'static str,

    #[serde(rename = "@handleUnknown")]
    pub handle_unknown: HandleUnknown,

    #[serde(rename = "$value")]
    pub content: DataContent,
}

/// What an importer that does not know the block should do with it
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HandleUnknown {
    Discard,
    Implementation,
}

/// Payload of a vendor data block (exactly one variant)
#[derive(Debug, Serialize)]
pub enum DataContent {
    #[serde(rename = "ProjectInformation")]
    ProjectInformation,
    #[serde(rename = "ProjectStructure")]
    ProjectStructure(ProjectStructure),
    #[serde(rename = "ElementType")]
    ElementType(String),
}

#[derive(Debug, Serialize)]
pub struct ProjectStructure {
    #[serde(rename = "Object")]
    pub object: Vec<ProjectObject>,
}

#[derive(Debug, Serialize)]
pub struct ProjectObject {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@ObjectId")]
    pub object_id: String,
}
