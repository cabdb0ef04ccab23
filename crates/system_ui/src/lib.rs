//! Shared UI primitive library for the storefront and admin back-office.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the site stylesheet. Pages compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AspectRatio, Badge, Button, ButtonSize, ButtonType, ButtonVariant, Card, CheckboxField,
    Cluster, DataTable, Elevation, EmptyState, FieldGroup, Grid, GridColumns, Heading,
    HeadingLevel, IconButton, ImageFrame, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
    NavBar, NavLink, PageContainer, Panel, SelectField, Spinner, Stack, Stepper, Surface,
    SurfaceVariant, Tab, TabList, Text, TextArea, TextField, TextRole, TextTone,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AspectRatio, Badge, Button, ButtonSize, ButtonType, ButtonVariant, Card, CheckboxField,
        Cluster, DataTable, Elevation, EmptyState, FieldGroup, Grid, GridColumns, Heading,
        HeadingLevel, Icon, IconButton, IconName, IconSize, ImageFrame, LayoutAlign, LayoutGap,
        LayoutJustify, LayoutPadding, NavBar, NavLink, PageContainer, Panel, SelectField, Spinner,
        Stack, Stepper, Surface, SurfaceVariant, Tab, TabList, Text, TextArea, TextField,
        TextRole, TextTone,
    };
}
