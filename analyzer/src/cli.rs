use clap::{Parser, ValueEnum};
use searchsort::Algorithm;

#[derive(Parser)]
#[command(name = "analyzer", about = "Search & sort analyzer", version)]
pub struct Cli {
    /// Comma-separated integers, e.g. "5,3,8,1"
    pub numbers: String,
    /// Algorithm to run
    #[arg(long, short, value_enum)]
    pub algorithm: AlgorithmArg,
    /// Value to search for (search algorithms only)
    #[arg(long, short)]
    pub target: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AlgorithmArg {
    LinearSearch,
    BinarySearch,
    SelectionSort,
    InsertionSort,
    MergeSort,
    BubbleSort,
    QuickSort,
    ShellSort,
    RadixSort,
    HeapSort,
    NearlySorted,
    CountingSort,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::LinearSearch => Algorithm::LinearSearch,
            AlgorithmArg::BinarySearch => Algorithm::BinarySearch,
            AlgorithmArg::SelectionSort => Algorithm::SelectionSort,
            AlgorithmArg::InsertionSort => Algorithm::InsertionSort,
            AlgorithmArg::MergeSort => Algorithm::MergeSort,
            AlgorithmArg::BubbleSort => Algorithm::BubbleSort,
            AlgorithmArg::QuickSort => Algorithm::QuickSort,
            AlgorithmArg::ShellSort => Algorithm::ShellSort,
            AlgorithmArg::RadixSort => Algorithm::RadixSort,
            AlgorithmArg::HeapSort => Algorithm::HeapSort,
            AlgorithmArg::NearlySorted => Algorithm::NearlySorted,
            AlgorithmArg::CountingSort => Algorithm::CountingSort,
        }
    }
}
