//! Static table layout served to the frontend
//!
//! Hand-authored display metadata: which columns exist, how they sort and
//! filter, the default sort, and the page-size choices. Nothing here is
//! derived from stored data.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Date,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub filterable: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DefaultSort {
    pub column: &'static str,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    pub default_page_size: u32,
    pub page_size_options: &'static [u32],
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterWidget {
    #[serde(rename = "type")]
    pub widget: &'static str,
    pub multiple: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableFilters {
    pub company: FilterWidget,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfiguration {
    pub columns: &'static [TableColumn],
    pub default_sort: DefaultSort,
    pub pagination: PaginationOptions,
    pub filters: TableFilters,
}

pub static DEFAULT_TABLE_CONFIGURATION: TableConfiguration = TableConfiguration {
    columns: &[
        TableColumn {
            key: "id",
            label: "ID",
            sortable: false,
            filterable: false,
            visible: true,
            width: Some(80),
            column_type: ColumnType::Number,
            format: None,
        },
        TableColumn {
            key: "code",
            label: "Code",
            sortable: true,
            filterable: true,
            visible: true,
            width: Some(120),
            column_type: ColumnType::String,
            format: None,
        },
        TableColumn {
            key: "name",
            label: "Name",
            sortable: true,
            filterable: true,
            visible: true,
            width: Some(300),
            column_type: ColumnType::String,
            format: None,
        },
        TableColumn {
            key: "company",
            label: "Company",
            sortable: true,
            filterable: true,
            visible: true,
            width: Some(250),
            column_type: ColumnType::String,
            format: None,
        },
        TableColumn {
            key: "launchDate",
            label: "Launch Date",
            sortable: true,
            filterable: true,
            visible: true,
            width: Some(150),
            column_type: ColumnType::Date,
            format: Some("dd.MM.yyyy"),
        },
    ],
    default_sort: DefaultSort {
        column: "launchDate",
        direction: SortDirection::Desc,
    },
    pagination: PaginationOptions {
        default_page_size: 20,
        page_size_options: &[10, 20, 50, 100],
    },
    filters: TableFilters {
        company: FilterWidget {
            widget: "dropdown",
            multiple: false,
        },
    },
};
