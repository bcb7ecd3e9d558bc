//! The algorithm catalog
//!
//! Every built-in algorithm is a variant of [`Algorithm`], so dispatch is
//! checked exhaustively at compile time instead of going through a
//! string-keyed table. Display names, slugs, categories, and complexity
//! metadata live here; the metadata is informational only and never affects
//! step generation.

use std::fmt;
use std::str::FromStr;

use super::errors::CatalogError;
use crate::structures::matrix::Traversal;

/// Big-O complexity metadata for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// Which family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
    BinarySearchProblem,
}

/// The fixed catalog of built-in algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    FirstOccurrence,
    LastOccurrence,
    PeakElement,
    SearchRotatedArray,
    FindMinRotatedArray,
    SqrtX,
}

impl Algorithm {
    pub const ALL: [Algorithm; 13] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::FirstOccurrence,
        Algorithm::LastOccurrence,
        Algorithm::PeakElement,
        Algorithm::SearchRotatedArray,
        Algorithm::FindMinRotatedArray,
        Algorithm::SqrtX,
    ];

    /// Human-readable display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::FirstOccurrence => "First Occurrence",
            Algorithm::LastOccurrence => "Last Occurrence",
            Algorithm::PeakElement => "Peak Element",
            Algorithm::SearchRotatedArray => "Search in Rotated Array",
            Algorithm::FindMinRotatedArray => "Find Minimum in Rotated Array",
            Algorithm::SqrtX => "Sqrt(x)",
        }
    }

    /// Kebab-case name accepted on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::SelectionSort => "selection-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::MergeSort => "merge-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::LinearSearch => "linear-search",
            Algorithm::BinarySearch => "binary-search",
            Algorithm::FirstOccurrence => "first-occurrence",
            Algorithm::LastOccurrence => "last-occurrence",
            Algorithm::PeakElement => "peak-element",
            Algorithm::SearchRotatedArray => "search-rotated",
            Algorithm::FindMinRotatedArray => "find-min-rotated",
            Algorithm::SqrtX => "sqrt",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::InsertionSort
            | Algorithm::MergeSort
            | Algorithm::QuickSort => Category::Sorting,
            Algorithm::LinearSearch | Algorithm::BinarySearch => Category::Searching,
            Algorithm::FirstOccurrence
            | Algorithm::LastOccurrence
            | Algorithm::PeakElement
            | Algorithm::SearchRotatedArray
            | Algorithm::FindMinRotatedArray
            | Algorithm::SqrtX => Category::BinarySearchProblem,
        }
    }

    /// True when the producer takes a target value
    pub fn needs_target(self) -> bool {
        matches!(
            self,
            Algorithm::LinearSearch
                | Algorithm::BinarySearch
                | Algorithm::FirstOccurrence
                | Algorithm::LastOccurrence
                | Algorithm::SearchRotatedArray
                | Algorithm::SqrtX
        )
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::BubbleSort | Algorithm::SelectionSort | Algorithm::InsertionSort => {
                Complexity { time: "O(n²)", space: "O(1)" }
            }
            Algorithm::MergeSort => Complexity { time: "O(n log n)", space: "O(n)" },
            Algorithm::QuickSort => Complexity {
                time: "O(n log n) average, O(n²) worst case",
                space: "O(log n)",
            },
            Algorithm::LinearSearch => Complexity { time: "O(n)", space: "O(1)" },
            Algorithm::BinarySearch
            | Algorithm::FirstOccurrence
            | Algorithm::LastOccurrence
            | Algorithm::PeakElement
            | Algorithm::SearchRotatedArray
            | Algorithm::FindMinRotatedArray => Complexity { time: "O(log n)", space: "O(1)" },
            Algorithm::SqrtX => Complexity { time: "O(log x)", space: "O(1)" },
        }
    }

    /// One-line description for catalog listings
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => {
                "Repeatedly compares adjacent elements and swaps them if out of order"
            }
            Algorithm::SelectionSort => {
                "Builds a sorted prefix by repeatedly selecting the minimum of the rest"
            }
            Algorithm::InsertionSort => {
                "Builds the sorted array one item at a time by shifting larger elements right"
            }
            Algorithm::MergeSort => {
                "Divide-and-conquer sort that recursively splits and merges sorted halves"
            }
            Algorithm::QuickSort => {
                "Divide-and-conquer sort partitioning around a pivot element"
            }
            Algorithm::LinearSearch => {
                "Checks each element in sequence until the target is found"
            }
            Algorithm::BinarySearch => {
                "Repeatedly halves the search interval of a sorted array"
            }
            Algorithm::FirstOccurrence => {
                "Find the first occurrence of target in a sorted array with duplicates"
            }
            Algorithm::LastOccurrence => {
                "Find the last occurrence of target in a sorted array with duplicates"
            }
            Algorithm::PeakElement => {
                "Find the peak element of a mountain array"
            }
            Algorithm::SearchRotatedArray => {
                "Find target in a rotated sorted array with no duplicates"
            }
            Algorithm::FindMinRotatedArray => {
                "Find the minimum element of a rotated sorted array"
            }
            Algorithm::SqrtX => {
                "Find the integer square root of x by binary search"
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CatalogError;

    /// Accepts either the display name or the slug, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|alg| key == alg.name().to_lowercase() || key == alg.slug())
            .ok_or(CatalogError::UnknownAlgorithm { name: s.to_string() })
    }
}

impl FromStr for Traversal {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "row-major" | "row major traversal" | "row-major traversal" => Ok(Traversal::RowMajor),
            "column-major" | "column major traversal" | "column-major traversal" => {
                Ok(Traversal::ColumnMajor)
            }
            "spiral" | "spiral traversal" => Ok(Traversal::Spiral),
            "diagonal" | "diagonal traversal" => Ok(Traversal::Diagonal),
            _ => Err(CatalogError::UnknownTraversal { name: s.to_string() }),
        }
    }
}
