//! Properties every algorithm should hold on arbitrary trees, checked through the public API.

mod traversals;
