//! Starter templates for new documents

use serde::{Deserialize, Serialize};

/// What kind of document a new tab should hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Generic,
    Java,
    Python,
    C,
    Cpp,
    Javascript,
}

impl DocumentKind {
    /// File extension used when naming a new document of this kind
    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Generic => "txt",
            DocumentKind::Java => "java",
            DocumentKind::Python => "py",
            DocumentKind::C => "c",
            DocumentKind::Cpp => "cpp",
            DocumentKind::Javascript => "js",
        }
    }
}

/// Portion of a file name before its first `.`
pub fn base_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Portion of a file name after its last `.`, lowercased
fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Starter content for a document, keyed on the extension of `name`
pub fn boilerplate_for(name: &str) -> String {
    let base = base_name(name);

    match extension_of(name).as_str() {
        "java" => format!(
            r#"// Java DSA Practice Template
public class {base} {{
    public static void main(String[] args) {{
        // Your code here
        System.out.println("Hello World");
        
        // Example array
        int[] arr = {{5, 3, 8, 4, 2}};
        System.out.println("Array: " + java.util.Arrays.toString(arr));
    }}
}}"#
        ),
        "py" => r#"# Python DSA Practice Template

def main():
    # Your code here
    print("Hello World")
    
    # Example array
    arr = []
    print(f"Array: {arr}")

if __name__ == "__main__":
    main()"#
            .to_string(),
        "c" => r#"#include <stdio.h>

int main() {
    // Your code here
    printf("Hello World\n");
    
    // Example array
    int arr[] = {5, 3, 8, 4, 2};
    int n = sizeof(arr) / sizeof(arr[0]);
    
    printf("Array: ");
    for (int i = 0; i < n; i++)
        printf("%d ", arr[i]);
    printf("\n");
    
    return 0;
}"#
        .to_string(),
        "cpp" => r#"#include <iostream>
#include <vector>
using namespace std;

int main() {
    // Your code here
    cout << "Hello World" << endl;
    
    // Example array
    vector<int> arr = {5, 3, 8, 4, 2};
    cout << "Array: ";
    for (int num : arr) cout << num << " ";
    cout << endl;
    
    return 0;
}"#
        .to_string(),
        "js" => r#"// JavaScript DSA Practice Template

function main() {
    // Your code here
    console.log("Hello World");
    
    // Example array
    const arr = [];
    console.log("Array:", arr);
}

main();"#
            .to_string(),
        _ => format!("// New file: {name}\n// Add your code here"),
    }
}
