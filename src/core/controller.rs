//! Tree controller: initial load, on-demand expansion, toggle handling.
//!
//! The controller is generic over the DOM and the transport so the same
//! code runs against the browser and against [`MemoryDom`](super::MemoryDom)
//! in tests. It never blocks: loads are futures the caller spawns.
//!
//! Overlapping loads on the same container are not coordinated. Each one
//! replaces the container's contents when it resolves, so the last response
//! to arrive wins.

use leptos::logging::warn;

use super::dom::TreeDom;
use super::error::TreeError;
use super::render::render_subtree;
use super::request::{TreeFetcher, TreeRequest};
use super::toggle::Transition;
use crate::config::{ITEM_TAG, LINK_TAG, LIST_TAG};
use crate::models::{HostParams, TreeOptions};

pub struct TreeController<D: TreeDom, F: TreeFetcher> {
    dom: D,
    fetcher: F,
    options: TreeOptions,
    params: HostParams,
    label: String,
    root: D::Node,
}

impl<D: TreeDom, F: TreeFetcher> TreeController<D, F> {
    /// Attach a controller to `root`.
    ///
    /// `label` is the already resolved value of the `label` parameter.
    pub fn new(
        dom: D,
        fetcher: F,
        options: TreeOptions,
        params: HostParams,
        label: String,
        root: D::Node,
    ) -> Self {
        Self {
            dom,
            fetcher,
            options,
            params,
            label,
            root,
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn root(&self) -> &D::Node {
        &self.root
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Load the tree from the host's root down to its current page.
    pub async fn load_initial(&self) -> Result<usize, TreeError> {
        self.load_full_subtree(
            &self.root,
            Some(&self.params.root_title),
            Some(&self.params.current_title),
        )
        .await
    }

    /// Fetch a whole subtree from the recursive endpoint into `container`.
    ///
    /// Without a `parent_title` the owning item's link text is used.
    pub async fn load_full_subtree(
        &self,
        container: &D::Node,
        parent_title: Option<&str>,
        current_title: Option<&str>,
    ) -> Result<usize, TreeError> {
        let owner = self.owning_item(container);
        let parent = self.parent_title(parent_title, owner.as_ref());
        let request = TreeRequest::recursive(
            &self.options.context_path,
            &self.params.space_id,
            &parent,
            current_title.unwrap_or_default(),
            &self.label,
        );
        self.load(container, owner, request).await
    }

    /// Fetch the direct children of the owning item into `container`.
    ///
    /// The item's link href goes along so the server can tell apart pages
    /// sharing a title.
    pub async fn load_one_level(
        &self,
        container: &D::Node,
        parent_title: Option<&str>,
    ) -> Result<usize, TreeError> {
        let owner = self.owning_item(container);
        let parent = self.parent_title(parent_title, owner.as_ref());
        let parent_link = owner
            .as_ref()
            .and_then(|item| self.dom.child_by_tag(item, LINK_TAG))
            .and_then(|link| self.dom.attribute(&link, "href"))
            .unwrap_or_default();
        let request = TreeRequest::direct(
            &self.options.context_path,
            &self.params.space_id,
            &parent,
            &parent_link,
            &self.label,
        );
        self.load(container, owner, request).await
    }

    /// Handle a click on the toggle control `toggle`.
    pub async fn toggle(&self, toggle: &D::Node) -> Result<Transition, TreeError> {
        let Some(item) = self
            .dom
            .parent(toggle)
            .filter(|parent| self.dom.tag_name(parent) == ITEM_TAG)
        else {
            return Ok(Transition::Ignore);
        };

        let css = &self.options.css;
        let transition = Transition::decide(
            self.dom.has_class(&item, &css.collapsed),
            self.dom.has_class(&item, &css.expanded),
            self.dom.child_by_tag(&item, LIST_TAG).is_some(),
        );

        match transition {
            Transition::Reveal => self.dom.replace_class(&item, &css.collapsed, &css.expanded),
            Transition::Collapse => self.dom.replace_class(&item, &css.expanded, &css.collapsed),
            Transition::Fetch => {
                let list = (self.options.render_children_ul)(&self.options);
                let list = match self.dom.append(&item, &list) {
                    Ok(list) => list,
                    Err(e) => {
                        self.dom.replace_class(&item, &css.collapsed, &css.error);
                        return Err(e.into());
                    }
                };
                self.load_one_level(&list, None).await?;
            }
            Transition::Ignore => {}
        }
        Ok(transition)
    }

    async fn load(
        &self,
        container: &D::Node,
        owner: Option<D::Node>,
        request: TreeRequest,
    ) -> Result<usize, TreeError> {
        let css = &self.options.css;
        if let Some(item) = &owner {
            self.dom.replace_class(item, &css.collapsed, &css.loading);
        }

        let result = match self.fetcher.fetch_nodes(&request).await {
            Ok(nodes) => render_subtree(&self.dom, container, &nodes, &self.options)
                .map_err(TreeError::from),
            Err(e) => Err(e.into()),
        };

        if let Some(item) = &owner {
            let outcome = if result.is_ok() { &css.expanded } else { &css.error };
            self.dom.replace_class(item, &css.loading, outcome);
        }
        if let Err(e) = &result {
            warn!("Tree load from {} failed: {}", request.url, e);
        }
        result
    }

    /// The item directly containing `container`. The root has none.
    fn owning_item(&self, container: &D::Node) -> Option<D::Node> {
        if *container == self.root {
            return None;
        }
        self.dom
            .parent(container)
            .filter(|parent| self.dom.tag_name(parent) == ITEM_TAG)
    }

    fn parent_title(&self, parent_title: Option<&str>, owner: Option<&D::Node>) -> String {
        parent_title
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .or_else(|| {
                let link = self.dom.child_by_tag(owner?, LINK_TAG)?;
                Some(self.dom.text(&link))
            })
            .unwrap_or_default()
    }
}
