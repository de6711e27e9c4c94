//! StreetType vocabulary: Brazilian street designations.
//!
//! Codes follow the postal abbreviation table up to `EB`, plus `ZIG`. The
//! label "Avenida" appears under two codes (`AVENUE`/`AV`); reading it
//! yields `AVENUE`. Stored records keep the code, so `AV` survives storage.

use super::labeled::labeled_enum;

labeled_enum! {
    /// The designation preceding a street name.
    #[allow(non_camel_case_types)]
    pub enum StreetType ("street type") {
        STREET = "STREET" => "Rua",
        AVENUE = "AVENUE" => "Avenida",
        ROAD = "ROAD" => "Estrada",
        A = "A" => "Área",
        AC = "AC" => "Acesso",
        ACA = "ACA" => "Acampamento",
        ACL = "ACL" => "Acesso Local",
        AD = "AD" => "Adro",
        AE = "AE" => "Área Especial",
        AER = "AER" => "Aeroporto",
        AL = "AL" => "Alameda",
        AMD = "AMD" => "Avenida Marginal Direita",
        AME = "AME" => "Avenida Marginal Esquerda",
        AN = "AN" => "Anel Viário",
        ANT = "ANT" => "Antiga Estrada",
        ART = "ART" => "Artéria",
        AT = "AT" => "Alto",
        ATL = "ATL" => "Atalho",
        A_V = "A_V" => "Área Verde",
        AV = "AV" => "Avenida",
        AVC = "AVC" => "Avenida Contorno",
        AVM = "AVM" => "Avenida Marginal",
        AVV = "AVV" => "Avenida Velha",
        BAL = "BAL" => "Balneário",
        BC = "BC" => "Beco",
        BCO = "BCO" => "Buraco",
        BEL = "BEL" => "Belvedere",
        BL = "BL" => "Bloco",
        BLO = "BLO" => "Balão",
        BLS = "BLS" => "Blocos",
        BLV = "BLV" => "Bulevar",
        BSQ = "BSQ" => "Bosque",
        BVD = "BVD" => "Boulevard",
        BX = "BX" => "Baixa",
        C = "C" => "Cais",
        CAL = "CAL" => "Calçada",
        CAM = "CAM" => "Caminho",
        CAN = "CAN" => "Canal",
        CH = "CH" => "Chácara",
        CHA = "CHA" => "Chapadão",
        CIC = "CIC" => "Ciclovia",
        CIR = "CIR" => "Circular",
        CJ = "CJ" => "Conjunto",
        CJM = "CJM" => "Conjunto Mutirão",
        CMP = "CMP" => "Complexo Viário",
        COL = "COL" => "Colônia",
        COM = "COM" => "Comunidade",
        CON = "CON" => "Condomínio",
        COR = "COR" => "Corredor",
        CPO = "CPO" => "Campo",
        CRG = "CRG" => "Córrego",
        CTN = "CTN" => "Contorno",
        DSC = "DSC" => "Descida",
        DSV = "DSV" => "Desvio",
        DT = "DT" => "Distrito",
        EB = "EB" => "Entre Bloco",
        ZIG = "ZIG" => "Zigue-Zague",
    }
}
