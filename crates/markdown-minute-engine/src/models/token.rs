/// Index of a node inside its [`Forest`].
///
/// Ids are handed out in creation order, so a node's id doubles as its slot
/// in the arena. [`NodeId::ROOT`] is the sentinel every forest starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

/// The role of an element, which fixes the markup the generator wraps it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Root,
    Text,
    Paragraph,
    H1,
    H2,
    H3,
    H4,
    Strong,
    Italic,
    Strike,
    Code,
    Link,
    Image,
    UnorderedList,
    OrderedList,
    ListItem,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableHeader,
    TableData,
    BlockQuote,
    Pre,
    Break,
    /// Already-rendered HTML standing in for a folded subtree.
    Merged,
}

impl ElementKind {
    /// Heading kind for a `#` run of the given length (1..=4).
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            _ => None,
        }
    }

    pub fn is_heading(self) -> bool {
        matches!(self, Self::H1 | Self::H2 | Self::H3 | Self::H4)
    }

    /// HTML tag name, for kinds rendered as a plain open/close pair.
    pub fn tag(self) -> Option<&'static str> {
        let tag = match self {
            Self::Paragraph => "p",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::Strong => "strong",
            Self::Italic => "i",
            Self::Strike => "strike",
            Self::Code => "code",
            Self::Link => "a",
            Self::Image => "img",
            Self::UnorderedList => "ul",
            Self::OrderedList => "ol",
            Self::ListItem => "li",
            Self::Table => "table",
            Self::TableHead => "thead",
            Self::TableBody => "tbody",
            Self::TableRow => "tr",
            Self::TableHeader => "th",
            Self::TableData => "td",
            Self::BlockQuote => "blockquote",
            Self::Pre => "pre",
            Self::Break => "br",
            Self::Root | Self::Text | Self::Merged => return None,
        };
        Some(tag)
    }
}

/// A `name="value"` pair rendered on the element's opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
}

impl Attribute {
    pub const HREF: &'static str = "href";
    pub const SRC: &'static str = "src";
    pub const ALIGN: &'static str = "align";
    pub const CLASS: &'static str = "class";

    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// One recognised markup unit of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: NodeId,
    pub kind: ElementKind,
    /// Literal text for `Text` leaves; the indentation key for list items.
    pub content: String,
    /// `None` only for the root sentinel.
    pub parent: Option<NodeId>,
    pub attributes: Vec<Attribute>,
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// Arena holding every element of one block.
///
/// Nodes are only ever appended, and a node's parent must already be in the
/// arena, so the structure is a tree by construction. Child order is the
/// order in which children were appended.
#[derive(Debug, Clone)]
pub struct Forest {
    nodes: Vec<Element>,
    children: Vec<Vec<NodeId>>,
}

impl Forest {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element {
                id: NodeId::ROOT,
                kind: ElementKind::Root,
                content: String::new(),
                parent: None,
                attributes: vec![],
            }],
            children: vec![vec![]],
        }
    }

    /// Appends a node under `parent` and returns its id.
    ///
    /// # Panics
    /// If `parent` is not a node of this forest.
    pub fn push(
        &mut self,
        kind: ElementKind,
        content: impl Into<String>,
        parent: NodeId,
        attributes: Vec<Attribute>,
    ) -> NodeId {
        assert!(
            parent.0 < self.nodes.len(),
            "parent {parent:?} is not part of this forest"
        );
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            id,
            kind,
            content: content.into(),
            parent: Some(parent),
            attributes,
        });
        self.children.push(vec![]);
        self.children[parent.0].push(id);
        id
    }

    pub fn text(&mut self, content: impl Into<String>, parent: NodeId) -> NodeId {
        self.push(ElementKind::Text, content, parent, vec![])
    }

    pub fn element(&mut self, kind: ElementKind, parent: NodeId) -> NodeId {
        self.push(kind, String::new(), parent, vec![])
    }

    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    /// All nodes in creation order, root sentinel first.
    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    /// Number of nodes, root sentinel included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}
