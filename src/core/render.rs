//! Recursive tree rendering.

use super::dom::TreeDom;
use super::error::DomError;
use super::memory::MemoryDom;
use crate::models::{NodeKind, TreeNode, TreeOptions};

/// Replace the contents of `container` with items for `nodes`.
///
/// Each item gets exactly one state class: `leaf` when `children` is absent,
/// `collapsed` when it is empty, `expanded` when it is populated. Populated
/// items get a nested children container, rendered recursively. Collapsed
/// items get theirs lazily, on first expand.
///
/// Returns the number of items rendered at every depth.
pub fn render_subtree<D: TreeDom>(
    dom: &D,
    container: &D::Node,
    nodes: &[TreeNode],
    options: &TreeOptions,
) -> Result<usize, DomError> {
    dom.clear(container);

    let mut rendered = 0;
    for node in nodes {
        let item = dom.append(container, &(options.render_child_li)(node, options))?;
        rendered += 1;

        match node.kind() {
            NodeKind::Leaf => dom.add_class(&item, &options.css.leaf),
            NodeKind::Collapsed => dom.add_class(&item, &options.css.collapsed),
            NodeKind::Expanded(children) => {
                dom.add_class(&item, &options.css.expanded);
                let list = dom.append(&item, &(options.render_children_ul)(options))?;
                rendered += render_subtree(dom, &list, children, options)?;
            }
        }
    }
    Ok(rendered)
}

/// Render `nodes` to static HTML, wrapped in a children container.
///
/// Produces the same markup a live tree would hold after loading `nodes`.
pub fn render_html(nodes: &[TreeNode], options: &TreeOptions) -> Result<String, DomError> {
    let dom = MemoryDom::new();
    let root = dom.create(&(options.render_children_ul)(options));
    render_subtree(&dom, &root, nodes, options)?;
    Ok(dom.to_html(root))
}
