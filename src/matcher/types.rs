/// Veredito de um campo do cadastro frente à planilha.
///
/// `verdict` em `None` marca campo somente de exibição (a situação
/// cadastral nunca é conferida).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
    pub label: &'static str,
    pub value: String,
    pub verdict: Option<bool>,
}
